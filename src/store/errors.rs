//! # Record Store Errors

use thiserror::Error;

use crate::persistence::PersistenceError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Book not found: {0}")]
    NotFound(String),

    /// Flushing the collection to disk failed
    #[error("{0}")]
    Persistence(#[from] PersistenceError),

    #[error("Lock poisoned")]
    LockPoisoned,
}
