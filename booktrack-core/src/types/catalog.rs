//! Catalog search-result projections and their wire shapes

use serde::{Deserialize, Serialize};

/// A read-only projection of one book from the external catalog.
///
/// Fetched fresh per query and never cached; saving one produces a
/// [`BookRecord`](super::BookRecord).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Catalog volume identifier
    pub id: String,

    /// Book title
    pub title: String,

    /// Authors
    pub authors: Vec<String>,

    /// Description/summary, if the catalog has one
    pub description: Option<String>,

    /// Category labels
    pub categories: Vec<String>,

    /// Publication date as a catalog-formatted string (may be year-only)
    pub published_date: Option<String>,

    /// Page count
    pub page_count: Option<u32>,

    /// Cover thumbnail URL
    pub thumbnail: Option<String>,
}

/// Wire shape of a catalog volume-list response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeList {
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// Wire shape of a single catalog volume
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Volume {
    pub id: String,
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

impl From<Volume> for CatalogEntry {
    fn from(v: Volume) -> Self {
        let info = v.volume_info;
        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail));
        Self {
            id: v.id,
            title: info.title,
            authors: info.authors,
            description: info.description,
            categories: info.categories,
            published_date: info.published_date,
            page_count: info.page_count,
            thumbnail,
        }
    }
}

impl VolumeList {
    pub(crate) fn into_entries(self) -> Vec<CatalogEntry> {
        self.items.into_iter().map(CatalogEntry::from).collect()
    }
}
