//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{ClassifyCommand, CompletionsCommand, InitCommand, LogCommand};

/// Logbook - Browse a repository's history as a classified changelog
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Also write a JSON debug log to the user's data directory
    #[arg(long, global = true, env = "LOGBOOK_LOG_FILE")]
    pub log_file: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Markdown output
    Markdown,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a page of the classified commit history
    Log(LogCommand),

    /// Classify commit messages
    Classify(ClassifyCommand),

    /// Write a default configuration file
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match &self.command {
            Commands::Log(cmd) => cmd.execute(self),
            Commands::Classify(cmd) => cmd.execute(self),
            Commands::Init(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }
}
