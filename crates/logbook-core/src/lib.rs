//! Logbook Core - Shared foundation for the Logbook changelog tools
//!
//! This crate provides the error taxonomy and configuration handling used by
//! the history source, the changelog pipeline, and the CLI.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, FilterError, LogbookError, Result, SourceError};
