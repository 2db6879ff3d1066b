//! Artistweb Catalog - Relation sources for the artist graph
//!
//! This crate provides catalogs that answer "which artists are related to
//! this one?" for the growth engine, either built in memory or loaded from
//! a JSON catalog file.

pub mod error;
pub mod file;
pub mod memory;

pub use error::{CatalogError, CatalogResult};
pub use file::{ArtistRecord, CatalogFile};
pub use memory::MemoryCatalog;
