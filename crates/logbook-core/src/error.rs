//! Error types for Logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for Logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Log source errors
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Filter input errors
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while retrieving commit history
#[derive(Debug, Error)]
pub enum SourceError {
    /// The history command failed or produced unusable output.
    ///
    /// Both queries of a fetch collapse into this single variant; there is
    /// no partial result.
    #[error(
        "Commit history unavailable: `{command}` failed: {reason}. \
         The environment may lack git access or a readable history"
    )]
    Unavailable { command: String, reason: String },
}

impl SourceError {
    /// Create an unavailable error for a command
    pub fn unavailable(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

/// Errors in user-supplied filter criteria
#[derive(Debug, Error)]
pub enum FilterError {
    /// A date bound is not a valid `YYYY-MM-DD` date
    #[error("Invalid {field} date '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    /// Unknown category name
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Start bound after end bound
    #[error("Date range start {start} is after end {end}")]
    InvertedRange { start: String, end: String },
}
