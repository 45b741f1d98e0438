//! Application state

use anyhow::Result;
use booktrack_core::{BookStore, CatalogSource, GoogleBooksClient, JsonStore};
use std::sync::Arc;

/// Shared application state.
///
/// The store and catalog source are injected as trait handles so tests can
/// swap in in-memory and canned implementations.
#[derive(Clone)]
pub struct AppState {
    /// Document store holding saved book records
    pub store: Arc<dyn BookStore>,

    /// External catalog search source
    pub catalog: Arc<dyn CatalogSource>,
}

impl AppState {
    /// Create state from the environment: a JSON store under
    /// `BOOKTRACK_DATA_PATH` and the public catalog endpoint (overridable
    /// with `BOOKTRACK_CATALOG_URL`).
    pub async fn from_env() -> Result<Self> {
        let data_path =
            std::env::var("BOOKTRACK_DATA_PATH").unwrap_or_else(|_| "./booktrack_data".to_string());
        let store = JsonStore::open(&data_path).await?;

        let catalog = match std::env::var("BOOKTRACK_CATALOG_URL") {
            Ok(url) => GoogleBooksClient::with_base_url(url)?,
            Err(_) => GoogleBooksClient::new()?,
        };

        Ok(Self::new(Arc::new(store), Arc::new(catalog)))
    }

    /// Create state from explicit collaborators
    pub fn new(store: Arc<dyn BookStore>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self { store, catalog }
    }
}
