//! The history source abstraction

use crate::repository::Result;
use crate::types::FetchedPage;

/// Anything that can produce pages of formatted commit log lines.
///
/// A fetch either returns both the page lines and the total count or fails
/// with a single [`SourceError`](logbook_core::SourceError).
#[async_trait::async_trait]
pub trait LogSource: Send + Sync {
    /// Short human-readable description of the source
    fn describe(&self) -> String;

    /// Fetch `page_size` lines after skipping `(page - 1) * page_size`
    async fn fetch_page(&self, page: usize, page_size: usize) -> Result<FetchedPage>;
}
