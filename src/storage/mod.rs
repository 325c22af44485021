//! Asset storage abstraction for storyblok-image-alt
//!
//! This module defines the `Asset` data model and the `AssetStore` trait
//! the pipeline runs against, along with the Storyblok Management API
//! implementation.

pub mod storyblok;

pub use storyblok::StoryblokClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Nested asset metadata as stored by Storyblok
///
/// Only the alt field is interpreted; every other key is carried through
/// untouched so updates can send the object back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Alt-text stored in the nested metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Passthrough for fields this tool does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One media object in a Storyblok space
///
/// The store exposes the alt-text twice: flat on the asset and nested
/// under `meta_data`. Eligibility is read from the nested field; updates
/// must write both fields together with identical values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Store-assigned identifier
    pub id: i64,

    /// Public URL of the asset; doubles as the image reference handed
    /// to the generator
    pub filename: String,

    /// MIME type; assets without one are treated as not-an-image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Flat alt field mirrored from the nested metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Nested metadata holding the authoritative alt-text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<AssetMetadata>,

    /// Passthrough for fields this tool does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    /// Whether the content type indicates an image
    ///
    /// A missing content type fails closed: the asset is not eligible.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyblok_image_alt::storage::Asset;
    ///
    /// let mut asset = Asset::new(1, "https://a.storyblok.com/f/1/a.png");
    /// assert!(!asset.is_image());
    /// asset.content_type = Some("image/png".to_string());
    /// assert!(asset.is_image());
    /// ```
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }

    /// The alt-text currently stored in the nested metadata
    ///
    /// Returns `None` when the metadata or the field is absent, which
    /// counts as "no existing alt-text".
    pub fn existing_alt(&self) -> Option<&str> {
        self.meta_data
            .as_ref()
            .and_then(|meta| meta.alt.as_deref())
            .filter(|alt| !alt.is_empty())
    }

    /// Set the flat and nested alt fields to the same text
    ///
    /// The store exposes the value twice, so both must be written
    /// together on update.
    pub fn set_alt(&mut self, text: &str) {
        self.alt = Some(text.to_string());
        self.meta_data.get_or_insert_with(AssetMetadata::default).alt = Some(text.to_string());
    }

    /// Construct a minimal asset (used by tests and examples)
    pub fn new(id: i64, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            content_type: None,
            alt: None,
            meta_data: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// Capability trait for the remote asset store
///
/// The pipeline only needs two operations: list the complete asset
/// collection (pagination handled internally) and write one asset back.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Fetch the full asset collection of the space
    ///
    /// # Errors
    ///
    /// Returns a `Fetch` error if any listing call fails; the run aborts.
    async fn list_assets(&self) -> Result<Vec<Asset>>;

    /// Persist one asset, sending the whole object back
    ///
    /// # Errors
    ///
    /// Returns an `Update` error if the write fails; the run aborts.
    async fn update_asset(&self, asset: &Asset) -> Result<Asset>;
}
