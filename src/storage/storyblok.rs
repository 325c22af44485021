//! Storyblok Management API client
//!
//! Implements the `AssetStore` trait against the Storyblok Management API:
//! paginated asset listing and full-object asset updates. The client keeps
//! no state beyond the HTTP connection pool reqwest manages internally.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::RunConfig;
use crate::error::{ImageAltError, Result};
use crate::storage::{Asset, AssetStore};

/// Assets fetched per listing request
const PER_PAGE: usize = 100;

/// Storyblok Management API client
///
/// Authenticates with a personal OAuth token and talks to the regional
/// Management API host. An explicit `api_base` can be supplied so tests
/// can point the client at a mock server.
///
/// # Examples
///
/// ```no_run
/// use storyblok_image_alt::config::RunConfig;
/// use storyblok_image_alt::storage::{AssetStore, StoryblokClient};
///
/// # async fn example(config: &RunConfig) -> storyblok_image_alt::error::Result<()> {
/// let client = StoryblokClient::new(config)?;
/// let assets = client.list_assets().await?;
/// println!("{} assets", assets.len());
/// # Ok(())
/// # }
/// ```
pub struct StoryblokClient {
    client: Client,
    api_base: String,
    space_id: String,
    oauth_token: String,
}

/// One page of the asset listing response
#[derive(Debug, Deserialize)]
struct AssetsPage {
    assets: Vec<Asset>,
}

impl StoryblokClient {
    /// Create a client for the region configured in `config`
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(config: &RunConfig) -> Result<Self> {
        Self::with_api_base(config, config.region.api_base())
    }

    /// Create a client against an explicit API base URL
    ///
    /// Used by tests to point the client at a mock server.
    pub fn with_api_base(config: &RunConfig, api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("storyblok-image-alt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ImageAltError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        let api_base = api_base.into();
        tracing::debug!(
            "Initialized Storyblok client: api_base={}, space={}",
            api_base,
            config.space_id
        );

        Ok(Self {
            client,
            api_base,
            space_id: config.space_id.clone(),
            oauth_token: config.oauth_token.clone(),
        })
    }

    fn assets_url(&self) -> String {
        format!("{}/v1/spaces/{}/assets", self.api_base, self.space_id)
    }

    /// Fetch one page of the asset listing
    async fn fetch_page(&self, page: usize) -> Result<Vec<Asset>> {
        let url = self.assets_url();
        tracing::debug!("Fetching asset page {} from {}", page, url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.oauth_token)
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())])
            .send()
            .await
            .map_err(|e| ImageAltError::Fetch(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Asset listing returned {}: {}", status, body);
            return Err(ImageAltError::Fetch(format!("status {}: {}", status, body)).into());
        }

        let page: AssetsPage = response
            .json()
            .await
            .map_err(|e| ImageAltError::Fetch(format!("invalid listing response: {}", e)))?;

        Ok(page.assets)
    }
}

#[async_trait]
impl AssetStore for StoryblokClient {
    /// Fetch the complete asset collection, following pagination
    ///
    /// Pages are requested sequentially until a short page signals the
    /// end of the collection. The result is fully materialized before
    /// the pipeline starts processing.
    async fn list_assets(&self) -> Result<Vec<Asset>> {
        let mut assets = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_page(page).await?;
            let batch_len = batch.len();
            assets.extend(batch);

            if batch_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        tracing::info!("Fetched {} assets in {} page(s)", assets.len(), page);
        Ok(assets)
    }

    /// Persist one asset via `PUT`, sending the whole object back
    async fn update_asset(&self, asset: &Asset) -> Result<Asset> {
        let url = format!("{}/{}", self.assets_url(), asset.id);
        tracing::debug!("Updating asset {} at {}", asset.id, url);

        let response = self
            .client
            .put(&url)
            .header("Authorization", &self.oauth_token)
            .json(asset)
            .send()
            .await
            .map_err(|e| ImageAltError::Update(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Asset update returned {}: {}", status, body);
            return Err(ImageAltError::Update(format!(
                "asset {}: status {}: {}",
                asset.id, status, body
            ))
            .into());
        }

        // Storyblok echoes the updated asset back; fall back to the sent
        // object when the body is empty or not an asset.
        match response.json::<Asset>().await {
            Ok(updated) => Ok(updated),
            Err(_) => Ok(asset.clone()),
        }
    }
}
