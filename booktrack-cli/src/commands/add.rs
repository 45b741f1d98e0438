//! Add command implementation

use anyhow::{Context, Result};
use booktrack_core::{BookRecord, BookStore, CatalogSource, JsonStore};

/// Fetch a catalog volume and save it to the user's library
pub async fn add(data_dir: &str, volume_id: &str, user: &str) -> Result<()> {
    let client = super::catalog_client()?;
    let entry = client
        .fetch(volume_id)
        .await
        .with_context(|| format!("Failed to fetch volume '{}'", volume_id))?;

    let store = JsonStore::open(data_dir)
        .await
        .with_context(|| format!("Failed to open store at {}", data_dir))?;

    let record = BookRecord::from_entry(&entry, user);
    let id = record.id;
    let title = record.title.clone();
    store.upsert(record).await.context("Failed to save record")?;

    println!("Saved '{}' as {}", title, id);
    Ok(())
}
