//! storyblok-image-alt - Alt-text generation CLI
//!
//! Main entry point: initializes tracing, parses the CLI, validates the
//! configuration, and runs the generation pipeline.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storyblok_image_alt::cli::Cli;
use storyblok_image_alt::commands;
use storyblok_image_alt::config::RunConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments (clap handles --help and missing
    // required options, exiting before anything else runs)
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    // Build and validate configuration
    let config = RunConfig::from_cli(cli);
    config.validate()?;

    tracing::info!(
        "Starting alt-text generation for space {} ({})",
        config.space_id,
        config.region
    );

    commands::generate::run_generate(config).await
}

/// Initialize tracing subscriber with environment filter
///
/// `--verbose` raises the default level so the per-asset trail becomes
/// visible; `RUST_LOG` still takes precedence when set.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "storyblok_image_alt=debug"
    } else {
        "storyblok_image_alt=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
