//! Shell completions command

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::output::{self, path_style};
use crate::cli::Cli;

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");

        match &self.output {
            Some(path) => {
                let mut file = std::fs::File::create(path)?;
                self.write_to(&mut file);
                if !cli.quiet {
                    output::success(&format!(
                        "Completions written to {}",
                        path_style().apply_to(path.display())
                    ));
                }
            }
            None => self.write_to(&mut std::io::stdout()),
        }

        Ok(())
    }

    fn write_to(&self, out: &mut dyn Write) {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, name, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let cmd = CompletionsCommand {
            shell: Shell::Bash,
            output: None,
        };
        let mut buffer = Vec::new();
        cmd.write_to(&mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("logbook"));
        assert!(script.contains("classify"));
    }
}
