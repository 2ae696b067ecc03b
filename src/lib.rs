//! bookshelf - book records over HTTP, persisted as a single JSON file

pub mod book;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod persistence;
pub mod search;
pub mod store;
