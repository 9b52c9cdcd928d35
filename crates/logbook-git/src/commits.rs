//! Commit history queries

use tracing::{info, instrument};

use logbook_core::error::SourceError;

use crate::repository::{GitLogSource, Result};
use crate::source::LogSource;
use crate::types::{skip_for, split_lines, FetchedPage, LOG_FORMAT};

impl GitLogSource {
    /// Count commits reachable from the configured revision
    pub async fn total_count(&self) -> Result<usize> {
        let args = vec![
            "rev-list".to_string(),
            "--count".to_string(),
            self.revision().to_string(),
        ];
        let stdout = self.run(&args).await?;

        parse_count(&stdout).ok_or_else(|| {
            SourceError::unavailable(
                format!("{} rev-list --count {}", self.program(), self.revision()),
                format!("unexpected count output '{}'", stdout.trim()),
            )
        })
    }

    /// Get up to `limit` formatted log lines after skipping `skip` entries
    pub async fn log_lines(&self, skip: usize, limit: usize) -> Result<Vec<String>> {
        let stdout = self.raw_log(skip, limit).await?;
        Ok(split_lines(&stdout))
    }

    /// Get the raw `<hash>|<author>|<date>|<subject>` text
    pub async fn raw_log(&self, skip: usize, limit: usize) -> Result<String> {
        let args = vec![
            "log".to_string(),
            format!("--skip={}", skip),
            format!("--max-count={}", limit),
            "--date=short".to_string(),
            format!("--pretty=format:{}", LOG_FORMAT),
            self.revision().to_string(),
            "--".to_string(),
        ];
        self.run(&args).await
    }
}

#[async_trait::async_trait]
impl LogSource for GitLogSource {
    fn describe(&self) -> String {
        format!("{} history of {} in {}", self.program(), self.revision(), self.workdir().display())
    }

    #[instrument(skip(self), fields(revision = %self.revision()))]
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<FetchedPage> {
        let skip = skip_for(page, page_size);

        let (total_count, lines) =
            tokio::try_join!(self.total_count(), self.log_lines(skip, page_size))?;

        info!(page, page_size, skip, total_count, fetched = lines.len(), "fetched history page");
        Ok(FetchedPage::new(lines, total_count))
    }
}

/// Parse `rev-list --count` output: one integer with optional whitespace
fn parse_count(output: &str) -> Option<usize> {
    output.trim().parse().ok()
}
