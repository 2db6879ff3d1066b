//! Error types for Artistweb Core

use thiserror::Error;

/// Result type alias using Artistweb's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by an external collaborator (relation source or renderer)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Artistweb error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("No new artists found after {rounds} expansion round(s); seeds are still disconnected")]
    NoProgress { rounds: usize },

    #[error("Seeds still disconnected after the limit of {limit} expansion round(s)")]
    RoundLimitExceeded { limit: usize },

    #[error("Seed not in graph: {0}")]
    SeedNotInGraph(String),

    /// Failure reported by the relation source, passed through unchanged
    #[error(transparent)]
    Source(BoxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
