//! Error types for Bikeshare Explorer
//!
//! This module defines the error types for all components of the application.
//! Errors are designed to be actionable: a `DataSourceError` is fatal for the
//! current filter cycle, while prompt and config errors carry enough context
//! for the session loop to report them cleanly.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading and parsing errors
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Source file for the selected city does not exist
    #[error("Trip log not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading the source file
    #[error("I/O error reading trip log")]
    Io(#[from] std::io::Error),

    /// CSV-level read or decode error
    #[error("CSV error in trip log")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("Required column missing from trip log header: {column}")]
    MissingColumn { column: &'static str },

    /// A required timestamp field could not be parsed
    #[error("Invalid timestamp in row {row}: {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    /// A required duration field could not be parsed or was negative
    #[error("Invalid trip duration in row {row}: {value:?}")]
    InvalidDuration { row: usize, value: String },
}

/// Interactive prompt errors
///
/// Invalid filter selections never reach the core pipeline: the prompt retries
/// until the input is valid or the retry budget is exhausted.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Standard input was closed before a valid answer was read
    #[error("Standard input closed while waiting for a response")]
    Closed,

    /// The retry budget for a single question was exhausted
    #[error("No valid answer after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    /// I/O error reading from or writing to the terminal
    #[error("Terminal I/O error")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file exists but could not be read
    #[error("Failed to read configuration file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format in {path}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dataset loading error
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// Interactive prompt error
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::DataSource(_) => "data-source",
            AppError::Prompt(_) => "prompt",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Data source result type alias
pub type DataSourceResult<T> = std::result::Result<T, DataSourceError>;

/// Prompt result type alias
pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
