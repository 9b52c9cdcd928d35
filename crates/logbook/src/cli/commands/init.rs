//! Init command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use logbook_core::config::defaults::{default_config_toml, DEFAULT_CONFIG_TOML};
use logbook_core::config::load_config;

use crate::cli::output::{self, path_style};
use crate::cli::Cli;

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self.write_config(&cwd)?;

        if !cli.quiet {
            output::success(&format!(
                "Configuration written to {}",
                path_style().apply_to(config_path.display())
            ));
        }

        Ok(())
    }

    fn write_config(&self, cwd: &std::path::Path) -> anyhow::Result<PathBuf> {
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_TOML));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let content = if config_path.extension().is_some_and(|e| e == "toml") {
            default_config_toml()
        } else {
            serde_yaml::to_string(&logbook_core::Config::default())?
        };
        std::fs::write(&config_path, content)?;

        // Make sure what we wrote loads back.
        load_config(&config_path)?;
        Ok(config_path)
    }
}
