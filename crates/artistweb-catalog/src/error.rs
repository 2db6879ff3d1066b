//! Catalog error types

use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Catalog-specific error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid artist identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Duplicate artist: {0}")]
    DuplicateArtist(String),

    #[error("Unknown artist: {0}")]
    UnknownArtist(String),
}

/// Parse a catalog id, reporting the raw text on failure
pub(crate) fn parse_id(raw: &str) -> CatalogResult<artistweb_core::Entity> {
    artistweb_core::Entity::parse(raw).map_err(|_| CatalogError::InvalidIdentifier(raw.to_string()))
}
