//! Alt-text generation command handler
//!
//! Prints the run header, builds the two API clients, executes the
//! pipeline, and renders the final digest. All user-facing console
//! output of a run lives here; the library modules only trace.

use colored::Colorize;

use crate::config::RunConfig;
use crate::error::Result;
use crate::generator::AltTextGenerator;
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::providers::OpenAiProvider;
use crate::storage::StoryblokClient;
use crate::summary::RunSummary;

/// Run alt-text generation for the configured space
///
/// # Arguments
///
/// * `config` - Validated run configuration (consumed)
///
/// # Errors
///
/// Propagates any fetch, generation, or update failure; in that case
/// no digest is printed and the process exits non-zero.
pub async fn run_generate(config: RunConfig) -> Result<()> {
    print_header(&config);

    let store = StoryblokClient::new(&config)?;
    let provider = OpenAiProvider::new(&config.openai_api_key)?;
    let generator = AltTextGenerator::new(provider, config.generation.clone());
    let pipeline = Pipeline::new(
        store,
        generator,
        PipelineOptions {
            overwrite: config.overwrite,
            dry_run: config.dry_run,
        },
    );

    println!();
    println!("Fetching and processing assets...");

    let summary = pipeline.run().await?;
    print_digest(&summary);
    Ok(())
}

/// Print the run parameters before any network call
fn print_header(config: &RunConfig) {
    println!();
    println!(
        "Performing generation of alt-texts for space {}:",
        config.space_id
    );
    println!("- language: {}", config.generation.language);
    println!("- model: {}", config.generation.model);
    println!("- max characters: {}", config.generation.max_characters);
    println!("- max tokens: {}", config.generation.max_tokens);
    println!(
        "- mode: {}",
        if config.dry_run { "dry-run" } else { "live" }
    );
    println!("- overwrite: {}", if config.overwrite { "yes" } else { "no" });
}

/// Print the final digest after a successful run
fn print_digest(summary: &RunSummary) {
    println!();
    println!("{}", summary);
    println!();
    println!(
        "{}",
        format!(
            "Process successfully finished in {} seconds.",
            summary.elapsed_seconds()
        )
        .green()
    );
    println!("Total used OpenAI tokens: {}", summary.total_tokens);
}
