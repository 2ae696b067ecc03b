//! CLI command implementations

use std::sync::Arc;

use super::args::{Command, ServeArgs};
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use crate::http_server::{BooksState, HttpServer};
use crate::observability::Logger;
use crate::persistence::JsonFileStore;
use crate::search::SearchEngine;
use crate::store::BookStore;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
    }
}

/// Hydrate the store and assemble handler state.
///
/// A collection file that fails to decode aborts startup.
pub fn open_state(config: &ServiceConfig) -> CliResult<Arc<BooksState>> {
    let backend = JsonFileStore::new(&config.data_file);
    let store = BookStore::open(Box::new(backend)).map_err(|e| {
        let message = e.to_string();
        Logger::fatal("STARTUP_FAILED", &[("error", message.as_str())]);
        CliError::boot_failed(message)
    })?;

    Ok(Arc::new(BooksState::new(
        store,
        SearchEngine::new(config.search_workers),
    )))
}

/// Load the collection and serve HTTP until the process is killed
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = ServiceConfig::from_args(args)?;
    let state = open_state(&config)?;
    let server = HttpServer::new(config.server.clone(), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(temp_dir: &TempDir) -> ServiceConfig {
        ServiceConfig {
            data_file: temp_dir.path().join("books.json"),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_state_creates_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir);

        let state = open_state(&config).unwrap();
        assert!(state.store.is_empty().unwrap());
        assert!(config.data_file.exists());
        assert_eq!(state.search.workers(), 4);
    }

    #[test]
    fn test_open_state_fails_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&temp_dir);
        fs::write(&config.data_file, "not json").unwrap();

        let err = open_state(&config).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
    }
}
