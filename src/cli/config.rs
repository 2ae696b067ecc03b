//! Service configuration
//!
//! Optional JSON file, every field defaulted. CLI flags are applied on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::args::ServeArgs;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::search::DEFAULT_WORKERS;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// JSON file holding the collection (default: "books.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Concurrent scan tasks per search (default: 4)
    #[serde(default = "default_search_workers")]
    pub search_workers: usize,

    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("books.json")
}

fn default_search_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            search_workers: default_search_workers(),
            server: HttpServerConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration for `serve`
    pub fn from_args(args: &ServeArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(host) = &args.host {
            config.server.host = host.clone();
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(data_file) = &args.data_file {
            config.data_file = data_file.clone();
        }
        if let Some(workers) = args.search_workers {
            config.search_workers = workers;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.search_workers == 0 {
            return Err(CliError::config_error("search_workers must be > 0"));
        }

        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        Ok(())
    }
}
