//! Document store abstraction for saved book records

use crate::error::StoreError;
use crate::types::BookRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Abstract store of [`BookRecord`] documents.
///
/// `upsert` is keyed by the record's client-generated id, so saving is a
/// single idempotent write; there is no separate "write back the generated
/// id" step that could be left half-done.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert or replace a record by its id
    async fn upsert(&self, record: BookRecord) -> StoreResult<()>;

    /// Fetch one record by id
    async fn get(&self, id: Uuid) -> StoreResult<BookRecord>;

    /// Fetch every record in the collection
    async fn all(&self) -> StoreResult<Vec<BookRecord>>;

    /// Update the progress timestamps of an existing record
    async fn set_progress(
        &self,
        id: Uuid,
        started: Option<DateTime<Utc>>,
        finished: Option<DateTime<Utc>>,
    ) -> StoreResult<BookRecord>;
}

/// On-disk index document for [`JsonStore`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct Collection {
    records: HashMap<Uuid, BookRecord>,
}

impl Collection {
    /// Load from a JSON file, treating a missing file as an empty collection
    async fn load(path: &Path) -> StoreResult<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    /// Save to a JSON file atomically.
    /// Writes to a temp file then renames to avoid partial writes.
    async fn save(&self, path: &Path) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(self)?;

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &data)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }
}

/// File-backed store: the whole collection lives in one JSON document
pub struct JsonStore {
    path: PathBuf,
    collection: RwLock<Collection>,
}

impl JsonStore {
    /// Open (or create) a store at the given data directory
    pub async fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let path = data_dir.join("books.json");
        let collection = Collection::load(&path).await?;
        Ok(Self {
            path,
            collection: RwLock::new(collection),
        })
    }

    async fn persist(&self, collection: &Collection) -> StoreResult<()> {
        collection.save(&self.path).await
    }
}

#[async_trait]
impl BookStore for JsonStore {
    async fn upsert(&self, record: BookRecord) -> StoreResult<()> {
        let mut collection = self.collection.write().await;
        collection.records.insert(record.id, record);
        self.persist(&collection).await
    }

    async fn get(&self, id: Uuid) -> StoreResult<BookRecord> {
        self.collection
            .read()
            .await
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn all(&self) -> StoreResult<Vec<BookRecord>> {
        Ok(self.collection.read().await.records.values().cloned().collect())
    }

    async fn set_progress(
        &self,
        id: Uuid,
        started: Option<DateTime<Utc>>,
        finished: Option<DateTime<Utc>>,
    ) -> StoreResult<BookRecord> {
        let mut collection = self.collection.write().await;
        let record = collection
            .records
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.started_reading = started;
        record.finished_reading = finished;
        let updated = record.clone();
        self.persist(&collection).await?;
        Ok(updated)
    }
}

/// In-memory store (for testing)
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, BookRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn upsert(&self, record: BookRecord) -> StoreResult<()> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> StoreResult<BookRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn all(&self) -> StoreResult<Vec<BookRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn set_progress(
        &self,
        id: Uuid,
        started: Option<DateTime<Utc>>,
        finished: Option<DateTime<Utc>>,
    ) -> StoreResult<BookRecord> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.started_reading = started;
        record.finished_reading = finished;
        Ok(record.clone())
    }
}
