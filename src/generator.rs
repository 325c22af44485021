//! Memoized alt-text generation
//!
//! Wraps an `AltTextModel` with the per-run label cache and a running
//! token total. The generator is created once per pipeline run and
//! discarded with it, which keeps cache and counter lifetimes explicit
//! instead of ambient.

use crate::cache::LabelCache;
use crate::config::GenerationOptions;
use crate::error::Result;
use crate::providers::AltTextModel;

/// Outcome of one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLabel {
    /// The alt-text for the image
    pub text: String,
    /// Tokens spent on this request; zero for cache hits
    pub tokens_used: u64,
}

/// Alt-text generator with per-run memoization
///
/// Consults the cache before every model call: a hit returns the stored
/// text at zero token cost, a miss calls the model, stores the result,
/// and adds the reported usage to the running total.
///
/// # Examples
///
/// ```no_run
/// use storyblok_image_alt::config::GenerationOptions;
/// use storyblok_image_alt::generator::AltTextGenerator;
/// use storyblok_image_alt::providers::OpenAiProvider;
///
/// # tokio_test::block_on(async {
/// let options = GenerationOptions {
///     language: "en".to_string(),
///     ..Default::default()
/// };
/// let provider = OpenAiProvider::new("sk-test").unwrap();
/// let mut generator = AltTextGenerator::new(provider, options);
/// let label = generator.generate("https://a.storyblok.com/f/1/a.png").await.unwrap();
/// println!("{}", label.text);
/// # });
/// ```
pub struct AltTextGenerator<M: AltTextModel> {
    model: M,
    options: GenerationOptions,
    cache: LabelCache,
    total_tokens: u64,
}

impl<M: AltTextModel> AltTextGenerator<M> {
    /// Create a generator for one run
    ///
    /// # Arguments
    ///
    /// * `model` - The external generation capability
    /// * `options` - Language, model, and limit settings for every call
    pub fn new(model: M, options: GenerationOptions) -> Self {
        Self {
            model,
            options,
            cache: LabelCache::new(),
            total_tokens: 0,
        }
    }

    /// Generate (or recall) the alt-text for an image reference
    ///
    /// # Arguments
    ///
    /// * `image_ref` - The image reference; here, the asset filename URL
    ///
    /// # Errors
    ///
    /// Propagates the model's `Generation` error on a cache miss; the
    /// cache and token total are left untouched in that case
    pub async fn generate(&mut self, image_ref: &str) -> Result<GeneratedLabel> {
        if let Some(text) = self.cache.get(image_ref) {
            tracing::debug!("Cache hit for {}", image_ref);
            return Ok(GeneratedLabel {
                text: text.to_string(),
                tokens_used: 0,
            });
        }

        let generation = self.model.describe_image(image_ref, &self.options).await?;
        self.cache.put(image_ref, generation.text.clone());
        self.total_tokens += generation.total_tokens;

        tracing::debug!(
            "Generated alt-text for {} ({} tokens)",
            image_ref,
            generation.total_tokens
        );

        Ok(GeneratedLabel {
            text: generation.text,
            tokens_used: generation.total_tokens,
        })
    }

    /// Tokens spent across all non-cache-hit calls so far
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Number of distinct image references generated so far
    pub fn cached_labels(&self) -> usize {
        self.cache.len()
    }
}
