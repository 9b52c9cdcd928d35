//! Exit codes for the CLI

use logbook_core::{ConfigError, FilterError, LogbookError, SourceError};

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// History source unavailable
pub const SOURCE_ERROR: i32 = 3;

/// Invalid user input (filters, categories)
pub const INPUT_ERROR: i32 = 5;

/// Pick the exit code for an error
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<SourceError>().is_some() {
        return SOURCE_ERROR;
    }
    if err.downcast_ref::<FilterError>().is_some() {
        return INPUT_ERROR;
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    match err.downcast_ref::<LogbookError>() {
        Some(LogbookError::Source(_)) => SOURCE_ERROR,
        Some(LogbookError::Filter(_)) => INPUT_ERROR,
        Some(LogbookError::Config(_)) => CONFIG_ERROR,
        _ => ERROR,
    }
}
