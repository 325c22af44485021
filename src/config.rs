//! Configuration management for storyblok-image-alt
//!
//! This module assembles the run configuration from CLI arguments and
//! validates it before any network call is made.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{ImageAltError, Result};

/// Storyblok region a space is hosted in
///
/// Determines the Management API host the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// EU (default)
    Eu,
    /// US
    Us,
    /// Australia
    Ap,
    /// Canada
    Ca,
    /// China
    Cn,
}

impl Region {
    /// Management API base URL for this region
    ///
    /// # Examples
    ///
    /// ```
    /// use storyblok_image_alt::config::Region;
    ///
    /// assert_eq!(Region::Eu.api_base(), "https://mapi.storyblok.com");
    /// assert_eq!(Region::Us.api_base(), "https://api-us.storyblok.com");
    /// ```
    pub fn api_base(&self) -> &'static str {
        match self {
            Self::Eu => "https://mapi.storyblok.com",
            Self::Us => "https://api-us.storyblok.com",
            Self::Ap => "https://api-ap.storyblok.com",
            Self::Ca => "https://api-ca.storyblok.com",
            Self::Cn => "https://app.storyblokchina.cn",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eu => write!(f, "eu"),
            Self::Us => write!(f, "us"),
            Self::Ap => write!(f, "ap"),
            Self::Ca => write!(f, "ca"),
            Self::Cn => write!(f, "cn"),
        }
    }
}

/// Options controlling a single alt-text generation call
///
/// `max_tokens` bounds the underlying model call; `max_characters` is
/// advisory text passed into the instruction prompt, not enforced by
/// truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Target language code for the generated text
    pub language: String,

    /// OpenAI model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Completion token cap per API call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Approximate character ceiling stated in the prompt
    #[serde(default = "default_max_characters")]
    pub max_characters: u32,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_max_characters() -> u32 {
    125
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            language: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            max_characters: default_max_characters(),
        }
    }
}

/// Full configuration for one run
///
/// Built from the CLI (with env-var fallbacks resolved by clap) and
/// validated once before the pipeline starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Storyblok personal OAuth token
    pub oauth_token: String,
    /// Target space id
    pub space_id: String,
    /// OpenAI API key
    pub openai_api_key: String,
    /// Region the space is hosted in
    pub region: Region,
    /// Generation options forwarded to the provider
    pub generation: GenerationOptions,
    /// Relabel assets that already carry an alt-text
    pub overwrite: bool,
    /// Generate but never persist
    pub dry_run: bool,
    /// Per-asset progress output
    pub verbose: bool,
}

impl RunConfig {
    /// Build a run configuration from parsed CLI arguments
    ///
    /// # Arguments
    ///
    /// * `cli` - Parsed command line arguments
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            oauth_token: cli.token,
            space_id: cli.space,
            openai_api_key: cli.openai_api_key,
            region: cli.region,
            generation: GenerationOptions {
                language: cli.language,
                model: cli.model,
                max_tokens: cli.max_tokens,
                max_characters: cli.max_characters,
            },
            overwrite: cli.overwrite,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }
    }

    /// Validate the configuration
    ///
    /// Runs before any network call. clap already enforces required
    /// options; this catches values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error for empty credentials, an empty language
    /// code, or a zero token cap.
    pub fn validate(&self) -> Result<()> {
        if self.oauth_token.trim().is_empty() {
            return Err(ImageAltError::Config("oauth token must not be empty".to_string()).into());
        }
        if self.space_id.trim().is_empty() {
            return Err(ImageAltError::Config("space id must not be empty".to_string()).into());
        }
        if self.openai_api_key.trim().is_empty() {
            return Err(
                ImageAltError::Config("OpenAI API key must not be empty".to_string()).into(),
            );
        }
        if self.generation.language.trim().is_empty() {
            return Err(
                ImageAltError::Config("language code must not be empty".to_string()).into(),
            );
        }
        if self.generation.max_tokens == 0 {
            return Err(
                ImageAltError::Config("max-tokens must be greater than zero".to_string()).into(),
            );
        }
        Ok(())
    }
}
