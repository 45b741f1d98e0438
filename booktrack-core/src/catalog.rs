//! Catalog source abstraction and the HTTP client for the public book catalog

use crate::error::CatalogError;
use crate::types::{CatalogEntry, Volume, VolumeList};
use async_trait::async_trait;
use std::time::Duration;

/// Result type for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1";
const HTTP_TIMEOUT_SECS: u64 = 10;
const HTTP_USER_AGENT: &str = concat!("booktrack/", env!("CARGO_PKG_VERSION"));

/// Abstract source of catalog entries.
///
/// The production implementation talks to the public volumes API; tests plug
/// in canned sources. Failure is a single [`CatalogError`], never a retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Search the catalog with a free-text query
    async fn search(&self, query: &str) -> CatalogResult<Vec<CatalogEntry>>;

    /// Fetch a single volume by its catalog identifier
    async fn fetch(&self, volume_id: &str) -> CatalogResult<CatalogEntry>;
}

/// HTTP client for the Google Books volumes API
pub struct GoogleBooksClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// Create a client against the public API endpoint
    pub fn new() -> CatalogResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for GoogleBooksClient {
    async fn search(&self, query: &str) -> CatalogResult<Vec<CatalogEntry>> {
        let url = format!("{}/volumes", self.base_url);
        tracing::debug!(query, "catalog search");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let list: VolumeList = response.json().await?;
        Ok(list.into_entries())
    }

    async fn fetch(&self, volume_id: &str) -> CatalogResult<CatalogEntry> {
        let url = format!("{}/volumes/{}", self.base_url, volume_id);
        tracing::debug!(volume_id, "catalog fetch");

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(volume_id.to_string()));
        }
        let response = response
            .error_for_status()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let volume: Volume = response.json().await?;
        Ok(volume.into())
    }
}
