//! Vision/language model abstraction for storyblok-image-alt
//!
//! This module defines the `AltTextModel` trait the generator runs
//! against, the result type carrying text and token usage, and the
//! OpenAI implementation.

pub mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;

use crate::config::GenerationOptions;
use crate::error::Result;

/// Result of one model call
///
/// `total_tokens` is the usage the provider reported for this call;
/// cache hits never reach the provider and therefore cost zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The generated alt-text
    pub text: String,
    /// Tokens the provider reported for this call
    pub total_tokens: u64,
}

/// Capability trait for the external alt-text model
///
/// Implementations invoke a vision/language model with an instruction
/// fixing the output language and an approximate character ceiling, plus
/// the image reference to describe.
///
/// # Examples
///
/// ```no_run
/// use async_trait::async_trait;
/// use storyblok_image_alt::config::GenerationOptions;
/// use storyblok_image_alt::error::Result;
/// use storyblok_image_alt::providers::{AltTextModel, Generation};
///
/// struct FixedModel;
///
/// #[async_trait]
/// impl AltTextModel for FixedModel {
///     async fn describe_image(
///         &self,
///         _image_url: &str,
///         _options: &GenerationOptions,
///     ) -> Result<Generation> {
///         Ok(Generation { text: "a red bicycle".to_string(), total_tokens: 42 })
///     }
/// }
/// ```
#[async_trait]
pub trait AltTextModel: Send + Sync {
    /// Generate a description for the image behind `image_url`
    ///
    /// # Arguments
    ///
    /// * `image_url` - Fetchable URL of the image to describe
    /// * `options` - Language, model, and limit settings for the call
    ///
    /// # Errors
    ///
    /// Returns a `Generation` error if the call fails or the response is
    /// missing the expected content or usage fields
    async fn describe_image(
        &self,
        image_url: &str,
        options: &GenerationOptions,
    ) -> Result<Generation>;
}
