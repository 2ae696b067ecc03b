//! CLI module for the book service
//!
//! Provides command-line interface for:
//! - serve: Load the collection and run the HTTP server

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{open_state, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
