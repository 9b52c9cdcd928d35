//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "logbook.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "logbook.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".logbook.toml",
        ".logbook.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Logbook Configuration

[source]
program = "git"
revision = "HEAD"

[pagination]
page_size = 10
max_buttons = 5

[output]
show_hashes = true
show_authors = true
"#;
