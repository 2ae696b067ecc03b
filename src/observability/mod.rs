//! Observability for the book service
//!
//! Structured one-line JSON logs with explicit severities. Lifecycle events
//! (startup, hydration) and every HTTP request go through [`Logger`].
//!
//! ```ignore
//! use bookshelf::observability::Logger;
//!
//! Logger::info("STORE_HYDRATED", &[("books", "42")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
