//! Git command wrapper

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, instrument};

use logbook_core::config::SourceConfig;
use logbook_core::error::SourceError;

/// Result type for history source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// History source that shells out to a `git` executable
#[derive(Debug, Clone)]
pub struct GitLogSource {
    program: String,
    workdir: PathBuf,
    revision: String,
}

impl GitLogSource {
    /// Create a source for the repository containing `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        let defaults = SourceConfig::default();
        Self {
            program: defaults.program,
            workdir: workdir.into(),
            revision: defaults.revision,
        }
    }

    /// Create a source from configuration
    pub fn from_config(config: &SourceConfig, workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: config.program.clone(),
            workdir: workdir.into(),
            revision: config.revision.clone(),
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// List history of a different revision
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    /// Get the working directory commands run in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the revision whose history is listed
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Get the executable name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the executable with `args` and return its stdout.
    ///
    /// Spawn failures, non-zero exits and non-UTF-8 output all become
    /// [`SourceError::Unavailable`].
    #[instrument(skip(self), fields(program = %self.program, workdir = %self.workdir.display()))]
    pub(crate) async fn run(&self, args: &[String]) -> Result<String> {
        let command_line = self.command_line(args);
        let start = std::time::Instant::now();

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| SourceError::unavailable(&command_line, format!("failed to spawn: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match output.status.code() {
                Some(code) => format!("exited with code {}: {}", code, stderr.trim()),
                None => format!("terminated by signal: {}", stderr.trim()),
            };
            return Err(SourceError::unavailable(command_line, reason));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| SourceError::unavailable(&command_line, format!("non UTF-8 output: {}", e)))?;

        debug!(
            command = %command_line,
            bytes = stdout.len(),
            duration_ms = start.elapsed().as_millis(),
            "command finished"
        );
        Ok(stdout)
    }

    fn command_line(&self, args: &[String]) -> String {
        let mut line = self.program.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
