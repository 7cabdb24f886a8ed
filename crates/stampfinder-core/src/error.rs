//! Error types for StampFinder

use thiserror::Error;

/// Main error type for StampFinder operations
#[derive(Debug, Error)]
pub enum StampFinderError {
    /// Options or engine settings that cannot describe a search
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Range whose lower bound exceeds its upper bound, or malformed range text
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Unknown sort field identifier
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Unknown sort order identifier
    #[error("Unknown sort order: {0}")]
    UnknownOrder(String),

    /// Catalog feed could not be decoded
    #[error("Catalog decode error: {0}")]
    CatalogDecode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for StampFinder operations
pub type Result<T> = std::result::Result<T, StampFinderError>;
