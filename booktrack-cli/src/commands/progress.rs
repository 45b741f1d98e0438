//! Start and finish command implementations

use anyhow::{Context, Result};
use booktrack_core::{BookStore, JsonStore};
use chrono::Utc;
use uuid::Uuid;

async fn open_store(data_dir: &str) -> Result<JsonStore> {
    JsonStore::open(data_dir)
        .await
        .with_context(|| format!("Failed to open store at {}", data_dir))
}

/// Mark a saved book as started (now)
pub async fn start(data_dir: &str, id: &str) -> Result<()> {
    let id = Uuid::parse_str(id).context("Invalid record id")?;
    let store = open_store(data_dir).await?;

    let record = store.get(id).await.context("Record not found")?;
    let updated = store
        .set_progress(id, Some(Utc::now()), record.finished_reading)
        .await
        .context("Failed to update progress")?;

    println!("Started '{}'", updated.title);
    Ok(())
}

/// Mark a saved book as finished (now)
pub async fn finish(data_dir: &str, id: &str) -> Result<()> {
    let id = Uuid::parse_str(id).context("Invalid record id")?;
    let store = open_store(data_dir).await?;

    let record = store.get(id).await.context("Record not found")?;
    let updated = store
        .set_progress(id, record.started_reading, Some(Utc::now()))
        .await
        .context("Failed to update progress")?;

    println!("Finished '{}'", updated.title);
    Ok(())
}
