//! # Record Store
//!
//! The authoritative in-memory book collection and its lock discipline.
//!
//! Readers share the lock. Every writer holds the exclusive lock across the
//! in-memory change and the disk flush, and the change only becomes visible
//! once the flush has succeeded.

pub mod book_store;
pub mod errors;

pub use book_store::BookStore;
pub use errors::{StoreError, StoreResult};
