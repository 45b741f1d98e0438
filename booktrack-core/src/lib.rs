//! Booktrack Core Library
//!
//! This crate provides the domain types and logic for the Booktrack reading
//! tracker: saved book records with reading-status classification, per-user
//! library aggregation, a tri-state catalog search adapter, and the document
//! store the records live in.

pub mod catalog;
pub mod error;
pub mod library;
pub mod search;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::{CatalogSource, GoogleBooksClient};
pub use error::{BooktrackError, CatalogError, Result, StoreError};
pub use library::{LibraryView, ReadingStats};
pub use search::{SearchSession, SearchState};
pub use session::UserSession;
pub use store::{BookStore, JsonStore, MemoryStore};
pub use types::{BookRecord, CatalogEntry, ReadingStatus};
