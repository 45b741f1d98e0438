//! Catalog search proxy handlers

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use booktrack_core::{CatalogEntry, CatalogError};
use serde::{Deserialize, Serialize};

/// Query parameters for catalog search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub entries: Vec<CatalogEntry>,
}

/// Map a catalog failure to a response status
fn catalog_status(e: &CatalogError) -> StatusCode {
    match e {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Search the external catalog.
///
/// An empty query short-circuits to an empty result set without touching
/// the catalog service.
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, StatusCode> {
    if query.q.is_empty() {
        return Ok(Json(SearchResponse {
            query: query.q,
            entries: Vec::new(),
        }));
    }

    let entries = state.catalog.search(&query.q).await.map_err(|e| {
        tracing::error!("Catalog search failed: {}", e);
        catalog_status(&e)
    })?;

    Ok(Json(SearchResponse {
        query: query.q,
        entries,
    }))
}

/// Fetch a single catalog volume by identifier
pub async fn get_volume(
    State(state): State<AppState>,
    Path(volume_id): Path<String>,
) -> Result<Json<CatalogEntry>, StatusCode> {
    let entry = state.catalog.fetch(&volume_id).await.map_err(|e| {
        tracing::warn!("Catalog fetch failed: {}", e);
        catalog_status(&e)
    })?;
    Ok(Json(entry))
}
