//! # Search Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Empty queries are rejected rather than treated as a wildcard
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// A scan task panicked or was cancelled
    #[error("Search worker failed: {0}")]
    Worker(String),

    #[error("{0}")]
    Store(#[from] StoreError),
}
