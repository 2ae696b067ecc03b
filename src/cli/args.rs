//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>]
//!   [--data-file <path>] [--search-workers <n>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - book records over HTTP, stored in a JSON file
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the book collection and serve the HTTP API
    Serve(ServeArgs),
}

/// Flags for `serve`. Each one overrides the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON file holding the book collection
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Number of concurrent scan tasks per search
    #[arg(long)]
    pub search_workers: Option<usize>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
