//! # Search
//!
//! Case-insensitive substring search over book titles and descriptions.

pub mod engine;
pub mod errors;

pub use engine::{SearchEngine, DEFAULT_WORKERS};
pub use errors::{SearchError, SearchResult};
