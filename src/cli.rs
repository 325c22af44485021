//! Command-line interface definition for storyblok-image-alt
//!
//! This module defines the CLI structure using clap's derive API. Every
//! credential option can also be supplied through an environment variable,
//! matching the conventions of the Storyblok CLI tooling.

use clap::Parser;

use crate::config::Region;

/// storyblok-image-alt - Generate alt-texts for Storyblok image assets
///
/// Enumerates every asset of a Storyblok space, asks OpenAI for a short
/// description of each eligible image, and writes the text back to the
/// asset's metadata.
#[derive(Parser, Debug, Clone)]
#[command(name = "storyblok-image-alt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Personal OAuth access token created in the account settings of a
    /// Storyblok user (NOT the access token of a space)
    #[arg(long, env = "STORYBLOK_OAUTH_TOKEN", hide_env_values = true)]
    pub token: String,

    /// ID of the space to process
    #[arg(long, env = "STORYBLOK_SPACE_ID")]
    pub space: String,

    /// OpenAI API key
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Region of the space
    #[arg(long, env = "STORYBLOK_REGION", value_enum, default_value_t = Region::Eu)]
    pub region: Region,

    /// Language code to generate alt-texts in (e.g. "en", "de")
    #[arg(long)]
    pub language: String,

    /// OpenAI model to use
    #[arg(long, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Maximum tokens to use per API call
    #[arg(long = "max-tokens", default_value_t = 500)]
    pub max_tokens: u32,

    /// Maximum characters for the generated text (advisory, passed into
    /// the prompt; not enforced by truncation)
    #[arg(long = "max-characters", default_value_t = 125)]
    pub max_characters: u32,

    /// Overwrite existing alt-texts
    #[arg(long)]
    pub overwrite: bool,

    /// Only display the changes instead of performing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show detailed output for every processed asset
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: [&str; 9] = [
        "storyblok-image-alt",
        "--token",
        "t0ken",
        "--space",
        "12345",
        "--openai-api-key",
        "sk-test",
        "--language",
        "en",
    ];

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::try_parse_from(MINIMAL);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.token, "t0ken");
        assert_eq!(cli.space, "12345");
        assert_eq!(cli.openai_api_key, "sk-test");
        assert_eq!(cli.language, "en");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(MINIMAL).unwrap();
        assert_eq!(cli.region, Region::Eu);
        assert_eq!(cli.model, "gpt-4o-mini");
        assert_eq!(cli.max_tokens, 500);
        assert_eq!(cli.max_characters, 125);
        assert!(!cli.overwrite);
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_missing_token() {
        let cli = Cli::try_parse_from([
            "storyblok-image-alt",
            "--space",
            "12345",
            "--openai-api-key",
            "sk-test",
            "--language",
            "en",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_missing_language() {
        let cli = Cli::try_parse_from([
            "storyblok-image-alt",
            "--token",
            "t0ken",
            "--space",
            "12345",
            "--openai-api-key",
            "sk-test",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_region() {
        let mut args: Vec<&str> = MINIMAL.to_vec();
        args.extend(["--region", "us"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.region, Region::Us);
    }

    #[test]
    fn test_cli_parse_invalid_region() {
        let mut args: Vec<&str> = MINIMAL.to_vec();
        args.extend(["--region", "mars"]);
        let cli = Cli::try_parse_from(args);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_flags() {
        let mut args: Vec<&str> = MINIMAL.to_vec();
        args.extend(["--overwrite", "--dry-run", "--verbose"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.overwrite);
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_generation_options() {
        let mut args: Vec<&str> = MINIMAL.to_vec();
        args.extend([
            "--model",
            "gpt-4o",
            "--max-tokens",
            "1000",
            "--max-characters",
            "100",
        ]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.model, "gpt-4o");
        assert_eq!(cli.max_tokens, 1000);
        assert_eq!(cli.max_characters, 100);
    }
}
