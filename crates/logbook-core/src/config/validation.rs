//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_source(config)?;
    validate_pagination(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_source(config: &Config) -> Result<()> {
    if config.source.program.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "source.program".to_string(),
            message: "program cannot be empty".to_string(),
        }
        .into());
    }

    if config.source.revision.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "source.revision".to_string(),
            message: "revision cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_pagination(config: &Config) -> Result<()> {
    if config.pagination.page_size == 0 {
        return Err(ConfigError::InvalidValue {
            field: "pagination.page_size".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }

    if config.pagination.max_buttons == 0 {
        return Err(ConfigError::InvalidValue {
            field: "pagination.max_buttons".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_page_size() {
        let mut config = Config::default();
        config.pagination.page_size = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_max_buttons() {
        let mut config = Config::default();
        config.pagination.max_buttons = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_program() {
        let mut config = Config::default();
        config.source.program = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
