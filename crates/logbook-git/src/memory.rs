//! In-memory history source

use std::path::Path;

use tracing::debug;

use logbook_core::error::SourceError;

use crate::repository::Result;
use crate::source::LogSource;
use crate::types::{skip_for, split_lines, FetchedPage};

/// History source backed by pre-formatted log lines.
///
/// Used for exported logs (`git log --pretty=format:%h|%an|%ad|%s > file`)
/// and as a stand-in for `git` in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLogSource {
    lines: Vec<String>,
    failure: Option<String>,
}

impl StaticLogSource {
    /// Create a source from formatted lines, newest first
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source from raw log text
    pub fn from_text(text: &str) -> Self {
        let lines = split_lines(text)
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();
        Self::new(lines)
    }

    /// Read an exported log file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading exported log");
        let text = std::fs::read_to_string(path).map_err(|e| {
            SourceError::unavailable(format!("read {}", path.display()), e.to_string())
        })?;
        Ok(Self::from_text(&text))
    }

    /// Create a source whose every fetch fails
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Number of lines held
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the source holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[async_trait::async_trait]
impl LogSource for StaticLogSource {
    fn describe(&self) -> String {
        format!("in-memory history of {} commits", self.lines.len())
    }

    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<FetchedPage> {
        if let Some(reason) = &self.failure {
            return Err(SourceError::unavailable("static source", reason.clone()));
        }

        let lines = self
            .lines
            .iter()
            .skip(skip_for(page, page_size))
            .take(page_size)
            .cloned()
            .collect();

        Ok(FetchedPage::new(lines, self.lines.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn numbered(count: usize) -> StaticLogSource {
        StaticLogSource::new((1..=count).map(|i| format!("h{}|Alice|2024-01-01|commit {}", i, i)))
    }

    #[tokio::test]
    async fn test_pages_are_windows() {
        let source = numbered(23);

        let first = source.fetch_page(1, 10).await.unwrap();
        assert_eq!(first.total_count, 23);
        assert_eq!(first.lines.len(), 10);
        assert!(first.lines[0].starts_with("h1|"));

        let last = source.fetch_page(3, 10).await.unwrap();
        assert_eq!(last.lines.len(), 3);
        assert!(last.lines[0].starts_with("h21|"));
    }

    #[tokio::test]
    async fn test_page_beyond_end() {
        let source = numbered(5);
        let page = source.fetch_page(4, 10).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = StaticLogSource::failing("no history");
        assert!(source.fetch_page(1, 10).await.is_err());
    }

    #[test]
    fn test_from_text_drops_blank_lines() {
        let source = StaticLogSource::from_text("a|b|2024-01-01|x\n\n  \nc|d|2024-01-02|y\n");
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.log");
        std::fs::write(&path, "abc123|Alice|2024-01-05|feat: add login\n").unwrap();

        let source = StaticLogSource::from_file(&path).unwrap();
        assert_eq!(source.len(), 1);

        assert!(StaticLogSource::from_file(&temp.path().join("missing.log")).is_err());
    }
}
