// crates/loadboard-core/src/error.rs
use thiserror::Error;

/// Errors raised at the fallible boundaries of the crate: reading a dataset
/// and turning raw records into validated [`Listing`](crate::Listing)s.
///
/// The search pipeline itself never fails; malformed values degrade instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid listing at position {index}: {reason}")]
    InvalidListing { index: usize, reason: String },

    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
