//! storyblok-image-alt - Alt-text generation for Storyblok assets
//!
//! This library provides the asset-processing pipeline behind the
//! `storyblok-image-alt` CLI: enumerate the assets of a Storyblok space,
//! generate a descriptive alt-text for every eligible image via OpenAI,
//! and write the text back to the asset's metadata.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `pipeline`: Orchestration of one run (fetch, filter, generate, persist)
//! - `filter`: Per-asset eligibility decision
//! - `generator`: Memoized alt-text generation with token accounting
//! - `cache`: In-memory label cache keyed by image reference
//! - `summary`: Run summary accumulation and digest rendering
//! - `storage`: Asset model, store abstraction, and Storyblok client
//! - `providers`: Model abstraction and OpenAI implementation
//! - `config`: Run configuration and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use storyblok_image_alt::config::RunConfig;
//! use storyblok_image_alt::commands::generate::run_generate;
//!
//! # async fn example(config: RunConfig) -> anyhow::Result<()> {
//! config.validate()?;
//! run_generate(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod pipeline;
pub mod providers;
pub mod storage;
pub mod summary;

// Re-export commonly used types
pub use config::{GenerationOptions, Region, RunConfig};
pub use error::{ImageAltError, Result};
pub use pipeline::{Pipeline, PipelineOptions};
pub use summary::RunSummary;
