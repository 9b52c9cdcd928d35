//! History source types

use serde::{Deserialize, Serialize};

/// Delimiter between the fields of one formatted log line
pub const FIELD_DELIMITER: char = '|';

/// `git log --pretty` format producing `<hash>|<author>|<date>|<subject>`
pub const LOG_FORMAT: &str = "%h|%an|%ad|%s";

/// One page of raw history as returned by a [`LogSource`](crate::LogSource)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Formatted log lines, newest first
    pub lines: Vec<String>,
    /// Number of commits reachable from the history tip
    pub total_count: usize,
}

impl FetchedPage {
    /// Create a new fetched page
    pub fn new(lines: Vec<String>, total_count: usize) -> Self {
        Self { lines, total_count }
    }

    /// Check if the page carried no log lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Number of entries to bypass before the given 1-based page
pub fn skip_for(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Split command output into log lines, treating blank output as no lines
pub(crate) fn split_lines(output: &str) -> Vec<String> {
    if output.trim().is_empty() {
        return Vec::new();
    }
    output.lines().map(str::to_string).collect()
}
