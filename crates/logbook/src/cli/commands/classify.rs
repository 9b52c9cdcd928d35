//! Classify command

use clap::Args;
use tracing::info;

use logbook_changelog::{classify, Category};

use crate::cli::output::category_style;
use crate::cli::{Cli, OutputFormat};

/// Classify commit messages
#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Commit messages to classify
    #[arg(required = true, value_name = "MESSAGE")]
    pub messages: Vec<String>,
}

impl ClassifyCommand {
    /// Execute the classify command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(count = self.messages.len(), "executing classify command");
        let results = self.classify_all();

        match cli.format {
            OutputFormat::Json => {
                let output: Vec<_> = results
                    .iter()
                    .map(|(message, category)| {
                        serde_json::json!({
                            "message": message,
                            "category": category,
                            "label": category.label(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Markdown => {
                for (message, category) in &results {
                    println!("- **{}** {}", category.label(), message);
                }
            }
            OutputFormat::Text => {
                for (message, category) in &results {
                    println!(
                        "{}  {}",
                        category_style(*category).apply_to(format!("{:<8}", category)),
                        message
                    );
                }
            }
        }

        Ok(())
    }

    fn classify_all(&self) -> Vec<(&str, Category)> {
        self.messages
            .iter()
            .map(|message| (message.as_str(), classify(message)))
            .collect()
    }
}
