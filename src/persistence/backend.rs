//! # Persistence Backend Trait

use super::errors::PersistenceResult;
use crate::book::Book;

/// Backend trait for collection persistence
pub trait BookPersistence: Send + Sync + std::fmt::Debug {
    /// Read the full collection. A missing backing file yields an empty one.
    fn load(&self) -> PersistenceResult<Vec<Book>>;

    /// Overwrite the backing file with the full collection
    fn save(&self, books: &[Book]) -> PersistenceResult<()>;

    /// Check whether a persisted collection exists yet
    fn exists(&self) -> bool;
}
