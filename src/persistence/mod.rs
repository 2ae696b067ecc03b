//! # Persistence
//!
//! Whole-collection JSON snapshots on disk.
//!
//! Every save overwrites the file in full. There is no journaling or
//! atomic rename, so a crash mid-write can leave a truncated file behind.

pub mod backend;
pub mod errors;
pub mod json_file;

pub use backend::BookPersistence;
pub use errors::{PersistenceError, PersistenceResult};
pub use json_file::JsonFileStore;
