//! Asset-processing pipeline
//!
//! Orchestrates one run: fetch the complete asset collection, filter
//! each asset, generate an alt-text through the memoizing generator,
//! and persist the result unless dry-run is active. Assets are handled
//! strictly sequentially, in the order the store returned them; the
//! first generation or update failure aborts the whole run.

use std::time::Instant;

use crate::error::Result;
use crate::filter::{self, Decision};
use crate::generator::AltTextGenerator;
use crate::providers::AltTextModel;
use crate::storage::AssetStore;
use crate::summary::RunSummary;

/// Behavior switches for one pipeline run
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Relabel assets that already carry an alt-text
    pub overwrite: bool,
    /// Generate but never call the update capability
    pub dry_run: bool,
}

/// One run of the alt-text pipeline
///
/// Owns the run summary and the generator (and through it the label
/// cache); both live exactly as long as the run. The store and model
/// are injected so the pipeline can be exercised against in-memory
/// fakes in tests.
///
/// # Examples
///
/// ```no_run
/// use storyblok_image_alt::config::{GenerationOptions, RunConfig};
/// use storyblok_image_alt::generator::AltTextGenerator;
/// use storyblok_image_alt::pipeline::{Pipeline, PipelineOptions};
/// use storyblok_image_alt::providers::OpenAiProvider;
/// use storyblok_image_alt::storage::StoryblokClient;
///
/// # async fn example(config: &RunConfig) -> storyblok_image_alt::error::Result<()> {
/// let store = StoryblokClient::new(config)?;
/// let generator = AltTextGenerator::new(
///     OpenAiProvider::new(&config.openai_api_key)?,
///     config.generation.clone(),
/// );
/// let pipeline = Pipeline::new(store, generator, PipelineOptions::default());
/// let summary = pipeline.run().await?;
/// println!("{}", summary);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<S: AssetStore, M: AltTextModel> {
    store: S,
    generator: AltTextGenerator<M>,
    options: PipelineOptions,
}

impl<S: AssetStore, M: AltTextModel> Pipeline<S, M> {
    /// Create a pipeline for one run
    ///
    /// # Arguments
    ///
    /// * `store` - The asset storage capability
    /// * `generator` - The memoizing alt-text generator
    /// * `options` - Overwrite and dry-run switches
    pub fn new(store: S, generator: AltTextGenerator<M>, options: PipelineOptions) -> Self {
        Self {
            store,
            generator,
            options,
        }
    }

    /// Execute the run and return its summary
    ///
    /// Steps, in order: fetch the full collection, then per asset apply
    /// the filter, generate, and persist (or preview under dry-run).
    /// The summary is finalized with the token total and elapsed time.
    ///
    /// # Errors
    ///
    /// Any fetch, generation, or update failure propagates and aborts
    /// the run; assets updated before the abort stay updated and no
    /// summary is produced.
    pub async fn run(mut self) -> Result<RunSummary> {
        let started = Instant::now();
        let mut summary = RunSummary::new();

        let assets = self.store.list_assets().await?;
        tracing::info!("Processing {} assets", assets.len());

        for mut asset in assets {
            summary.seen += 1;
            tracing::debug!("Asset \"{}\" (ID {})", asset.filename, asset.id);

            match filter::evaluate(&asset, self.options.overwrite) {
                Decision::SkipNotImage => {
                    tracing::debug!("Not an image. Skipping.");
                    summary.skipped_not_image += 1;
                    continue;
                }
                Decision::SkipExistingAlt => {
                    tracing::debug!(
                        "Alt-text already exists ({:?}) and overwrite is not set. Skipping.",
                        asset.existing_alt()
                    );
                    summary.skipped_existing_alt += 1;
                    continue;
                }
                Decision::Process => {}
            }

            let label = self.generator.generate(&asset.filename).await?;
            tracing::debug!("Generated alt-text: {}", label.text);

            if self.options.dry_run {
                tracing::debug!("Dry-run mode. No changes performed.");
                summary.previewed += 1;
                continue;
            }

            asset.set_alt(&label.text);
            self.store.update_asset(&asset).await?;
            summary.updated += 1;
            tracing::debug!("Asset successfully updated.");
        }

        summary.total_tokens = self.generator.total_tokens();
        summary.elapsed = started.elapsed();
        Ok(summary)
    }
}
