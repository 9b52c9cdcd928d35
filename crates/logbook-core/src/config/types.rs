//! Configuration types

use serde::{Deserialize, Serialize};

/// Main configuration for Logbook
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// History source configuration
    pub source: SourceConfig,

    /// Pagination configuration
    pub pagination: PaginationConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Where commit history comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Version-control executable to invoke
    pub program: String,

    /// Revision whose history is listed
    pub revision: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            revision: "HEAD".to_string(),
        }
    }
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Commits per page
    pub page_size: usize,

    /// Maximum number of numbered page buttons in the window
    pub max_buttons: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_buttons: 5,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to show commit hashes
    pub show_hashes: bool,

    /// Whether to show authors
    pub show_authors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_hashes: true,
            show_authors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.program, "git");
        assert_eq!(config.source.revision, "HEAD");
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.pagination.max_buttons, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[pagination]\npage_size = 25\n").unwrap();
        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.pagination.max_buttons, 5);
        assert!(config.output.show_hashes);
    }
}
