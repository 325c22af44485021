//! OpenAI provider implementation for storyblok-image-alt
//!
//! Implements the `AltTextModel` trait against the OpenAI chat
//! completions API. Each call sends a two-role instruction: a system
//! directive fixing the output language and an approximate character
//! ceiling, and a user directive carrying the image URL.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GenerationOptions;
use crate::error::{ImageAltError, Result};
use crate::providers::{AltTextModel, Generation};

/// Default OpenAI API base URL
const OPENAI_API_BASE: &str = "https://api.openai.com";

/// OpenAI chat completions provider
///
/// Holds the API key and an HTTP client. An explicit `api_base` can be
/// supplied so tests can point the provider at a mock server.
///
/// # Examples
///
/// ```no_run
/// use storyblok_image_alt::config::GenerationOptions;
/// use storyblok_image_alt::providers::{AltTextModel, OpenAiProvider};
///
/// # tokio_test::block_on(async {
/// let provider = OpenAiProvider::new("sk-test").unwrap();
/// let options = GenerationOptions {
///     language: "en".to_string(),
///     ..Default::default()
/// };
/// let generation = provider
///     .describe_image("https://a.storyblok.com/f/1/a.png", &options)
///     .await
///     .unwrap();
/// println!("{} ({} tokens)", generation.text, generation.total_tokens);
/// # });
/// ```
pub struct OpenAiProvider {
    client: Client,
    api_base: String,
    api_key: String,
}

/// Request structure for the chat completions endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_completion_tokens: u32,
}

/// Message with multi-part content (text and image parts)
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

/// One content part of a chat message
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrlRef },
}

/// Image reference inside an image content part
#[derive(Debug, Serialize)]
struct ImageUrlRef {
    url: String,
}

/// Response structure from the chat completions endpoint
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

/// One choice in a chat completions response
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

/// Assistant message inside a choice
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Token usage reported by the API
#[derive(Debug, Deserialize)]
struct ChatUsage {
    total_tokens: u64,
}

impl OpenAiProvider {
    /// Create a provider against the public OpenAI API
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_api_base(api_key, OPENAI_API_BASE)
    }

    /// Create a provider against an explicit API base URL
    ///
    /// Used by tests to point the provider at a mock server.
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent(concat!("storyblok-image-alt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ImageAltError::Generation(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            api_key: api_key.into(),
        })
    }

    /// Build the two-role instruction for one image
    fn build_request(image_url: &str, options: &GenerationOptions) -> ChatRequest {
        let system_text = format!(
            "You are an image analyst. Your goal is to generate an alt-text for this image \
             and output the result in the following language: {}. \
             Limit the output to {} characters.",
            options.language, options.max_characters
        );

        ChatRequest {
            model: options.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: vec![ContentPart::Text { text: system_text }],
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: vec![
                        ContentPart::Text {
                            text: "Follow the instructions and rules provided in the System role."
                                .to_string(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrlRef {
                                url: image_url.to_string(),
                            },
                        },
                    ],
                },
            ],
            max_completion_tokens: options.max_tokens,
        }
    }
}

#[async_trait]
impl AltTextModel for OpenAiProvider {
    async fn describe_image(
        &self,
        image_url: &str,
        options: &GenerationOptions,
    ) -> Result<Generation> {
        let url = format!("{}/v1/chat/completions", self.api_base);
        let request = Self::build_request(image_url, options);

        tracing::debug!("Requesting alt-text for {} via {}", image_url, options.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ImageAltError::Generation(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI returned {}: {}", status, body);
            return Err(ImageAltError::Generation(format!("status {}: {}", status, body)).into());
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ImageAltError::Generation(format!("invalid response: {}", e)))?;

        let text = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ImageAltError::Generation("response contains no message content".to_string())
            })?;

        let usage = chat.usage.ok_or_else(|| {
            ImageAltError::Generation("response contains no usage information".to_string())
        })?;

        Ok(Generation {
            text,
            total_tokens: usage.total_tokens,
        })
    }
}
