//! Core domain types

mod catalog;
mod record;

pub use catalog::CatalogEntry;
pub(crate) use catalog::{Volume, VolumeList};
pub use record::{BookRecord, ReadingStatus};
