//! Error types for storyblok-image-alt
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for storyblok-image-alt operations
///
/// This enum encompasses all failure modes of a run: configuration
/// problems detected before any network call, asset listing failures,
/// alt-text generation failures, and asset write-back failures.
///
/// No variant is retried automatically. The first propagated failure
/// aborts the run; assets updated before the abort stay updated.
#[derive(Error, Debug)]
pub enum ImageAltError {
    /// Configuration-related errors (missing/invalid options)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Asset listing failed (Storyblok Management API)
    #[error("Asset listing failed: {0}")]
    Fetch(String),

    /// Alt-text generation failed (OpenAI call or malformed response)
    #[error("Alt-text generation failed: {0}")]
    Generation(String),

    /// Asset update failed (Storyblok Management API write)
    #[error("Asset update failed: {0}")]
    Update(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for storyblok-image-alt operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ImageAltError::Config("missing language".to_string());
        assert_eq!(error.to_string(), "Configuration error: missing language");
    }

    #[test]
    fn test_fetch_error_display() {
        let error = ImageAltError::Fetch("status 401".to_string());
        assert_eq!(error.to_string(), "Asset listing failed: status 401");
    }

    #[test]
    fn test_generation_error_display() {
        let error = ImageAltError::Generation("empty choices".to_string());
        assert_eq!(
            error.to_string(),
            "Alt-text generation failed: empty choices"
        );
    }

    #[test]
    fn test_update_error_display() {
        let error = ImageAltError::Update("status 422".to_string());
        assert_eq!(error.to_string(), "Asset update failed: status 422");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ImageAltError = io_error.into();
        assert!(matches!(error, ImageAltError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: ImageAltError = json_error.into();
        assert!(matches!(error, ImageAltError::Serialization(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImageAltError>();
    }
}
