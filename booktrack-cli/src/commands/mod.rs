//! CLI command implementations

mod add;
mod library;
mod progress;
mod search;

pub use add::add;
pub use library::{list, stats};
pub use progress::{finish, start};
pub use search::search;

use anyhow::{Context, Result};
use booktrack_core::GoogleBooksClient;

/// Catalog client from the environment: honors `BOOKTRACK_CATALOG_URL`,
/// falling back to the public endpoint
fn catalog_client() -> Result<GoogleBooksClient> {
    let client = match std::env::var("BOOKTRACK_CATALOG_URL") {
        Ok(url) => GoogleBooksClient::with_base_url(url),
        Err(_) => GoogleBooksClient::new(),
    };
    client.context("Failed to create catalog client")
}
