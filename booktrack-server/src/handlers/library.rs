//! Saved-library handlers: shelves, saving, progress, stats

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use booktrack_core::{
    BookRecord, CatalogEntry, LibraryView, ReadingStats, StoreError, UserSession,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Map a store failure to a response status
fn store_status(e: &StoreError) -> StatusCode {
    match e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Query parameters naming the owning user
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user: String,

    /// Email from the identity provider, used for the greeting only
    pub email: Option<String>,
}

/// Shelves response for the home view
#[derive(Debug, Serialize)]
pub struct ShelvesResponse {
    /// Started but not finished
    pub reading_now: Vec<BookRecord>,

    /// Saved but not started
    pub up_next: Vec<BookRecord>,

    /// Total records owned by the user
    pub total: usize,
}

/// List a user's saved books, partitioned into home-view shelves
pub async fn list_shelves(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ShelvesResponse>, StatusCode> {
    let records = state.store.all().await.map_err(|e| {
        tracing::error!("Failed to load library: {}", e);
        store_status(&e)
    })?;

    let view = LibraryView::for_user(&records, &query.user);
    Ok(Json(ShelvesResponse {
        reading_now: view.in_progress().into_iter().cloned().collect(),
        up_next: view.unstarted().into_iter().cloned().collect(),
        total: view.records().len(),
    }))
}

/// Request body for saving a catalog entry to a user's library
#[derive(Debug, Deserialize)]
pub struct SaveBookRequest {
    pub user: String,
    pub entry: CatalogEntry,
}

/// Response for a saved record
#[derive(Debug, Serialize)]
pub struct SaveBookResponse {
    pub id: Uuid,
    pub title: String,
}

/// Save a catalog entry as a new record owned by the user
pub async fn save_book(
    State(state): State<AppState>,
    Json(request): Json<SaveBookRequest>,
) -> Result<(StatusCode, Json<SaveBookResponse>), StatusCode> {
    let record = BookRecord::from_entry(&request.entry, request.user.as_str());
    let response = SaveBookResponse {
        id: record.id,
        title: record.title.clone(),
    };

    state.store.upsert(record).await.map_err(|e| {
        tracing::error!("Failed to save record: {}", e);
        store_status(&e)
    })?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a single saved record
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookRecord>, StatusCode> {
    let id = Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let record = state.store.get(id).await.map_err(|e| store_status(&e))?;
    Ok(Json(record))
}

/// Request body for a progress update
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    pub started_reading: Option<DateTime<Utc>>,
    pub finished_reading: Option<DateTime<Utc>>,
}

/// Set a record's progress timestamps
pub async fn set_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ProgressRequest>,
) -> Result<Json<BookRecord>, StatusCode> {
    let id = Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let record = state
        .store
        .set_progress(id, request.started_reading, request.finished_reading)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update progress: {}", e);
            store_status(&e)
        })?;
    Ok(Json(record))
}

/// Stats response for the stats view
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub user: String,

    /// Greeting name derived from the session identity
    pub display_name: String,

    pub stats: ReadingStats,

    /// Finished books, for the read-list display
    pub finished: Vec<BookRecord>,
}

/// Summary reading statistics for a user
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<StatsResponse>, StatusCode> {
    let records = state.store.all().await.map_err(|e| {
        tracing::error!("Failed to load library: {}", e);
        store_status(&e)
    })?;

    let mut session = UserSession::new(query.user.as_str());
    if let Some(email) = &query.email {
        session = session.with_email(email.as_str());
    }

    let view = LibraryView::for_user(&records, &query.user);
    Ok(Json(StatsResponse {
        user: query.user,
        display_name: session.display_name(),
        stats: view.stats(),
        finished: view.finished().into_iter().cloned().collect(),
    }))
}
