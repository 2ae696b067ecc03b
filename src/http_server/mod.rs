//! # HTTP Server Module
//!
//! Axum server exposing the book API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - List and create books
//! - `/books/search?q=` - Substring search over titles and descriptions
//! - `/books/:id` - Fetch, replace and delete a single book

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::BooksState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
