//! Configuration management for Bikeshare Explorer
//!
//! Multi-source configuration with zero-config defaults: an explicit
//! `--config` path wins, otherwise standard locations are searched, otherwise
//! built-in defaults apply. The trip log directory additionally honors the
//! `BIKESHARE_DATA_DIR` environment variable, below the CLI flag and above
//! the config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::{data, env, logging};
use crate::errors::{ConfigError, ConfigResult};

/// Application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Directory containing the city trip logs (None = built-in default)
    pub data_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration, discovering the file when no path is given
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a config file exists but cannot be read
    /// or parsed. A missing file is not an error; defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_file(path);
        }

        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No config file found in standard locations, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Find a configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![
            // Project-local config
            PathBuf::from("./bikeshare-explorer.toml"),
        ];

        // User config
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("bikeshare-explorer").join("config.toml"));
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }
        None
    }

    /// Load configuration from a TOML file
    fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Resolve the trip log directory
    ///
    /// Precedence: CLI flag, then `BIKESHARE_DATA_DIR`, then the config file,
    /// then the built-in default.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(dir) = cli_override {
            return dir.to_path_buf();
        }
        if let Ok(dir) = std::env::var(env::DATA_DIR) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        if let Some(dir) = &self.data.data_dir {
            return dir.clone();
        }
        PathBuf::from(data::DEFAULT_DATA_DIR)
    }
}
