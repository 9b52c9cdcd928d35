//! Changelog session: fetch, parse, filter and paginate one history
//!
//! A session owns everything a changelog view needs between interactions:
//! the history source, the current page position, the active filters and
//! the records of the last fetched page. Changing page always goes back to
//! the source with a new skip/limit.

use logbook_git::{FetchedPage, LogSource, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::filter::{filter, FilterCriteria};
use crate::paginator::{PageItem, PageState, Pagination, DEFAULT_MAX_BUTTONS};
use crate::parser::parse_lines;
use crate::types::CommitRecord;

/// Identifier tagging one fetch issued by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(u64);

/// A page fetch that has been issued but not yet applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Tag used to recognise stale completions
    pub id: RequestId,
    /// 1-based page to fetch
    pub page: usize,
    /// Number of commits per page
    pub page_size: usize,
}

/// Outcome of applying a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the latest request and is now shown
    Current,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

/// Serializable snapshot of what a changelog view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Records of the current page that pass the filters
    pub records: Vec<CommitRecord>,
    /// 1-based current page
    pub page: usize,
    /// Commits per page
    pub page_size: usize,
    /// Total commits in the history
    pub total_count: usize,
    /// Total pages
    pub total_pages: usize,
    /// Page buttons, empty when pagination is hidden
    pub pages: Vec<PageItem>,
    /// Whether "Previous" is enabled
    pub has_previous: bool,
    /// Whether "Next" is enabled
    pub has_next: bool,
    /// Whether any filter is active
    pub filtered: bool,
}

impl PageView {
    /// Check if the view has nothing to show
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rebuild the pagination controls described by this view
    pub fn pagination(&self) -> Pagination {
        Pagination {
            state: PageState {
                current_page: self.page,
                page_size: self.page_size,
                total_count: self.total_count,
            },
            total_pages: self.total_pages,
            items: self.pages.clone(),
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}

/// Paginated, filterable view over a [`LogSource`]
pub struct ChangelogSession<S: LogSource> {
    source: S,
    state: PageState,
    criteria: FilterCriteria,
    records: Vec<CommitRecord>,
    max_buttons: usize,
    next_id: u64,
    latest: Option<RequestId>,
    loaded: bool,
}

impl<S: LogSource> ChangelogSession<S> {
    /// Create a session; nothing is fetched until [`load`](Self::load)
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            state: PageState::new(page_size),
            criteria: FilterCriteria::default(),
            records: Vec::new(),
            max_buttons: DEFAULT_MAX_BUTTONS,
            next_id: 0,
            latest: None,
            loaded: false,
        }
    }

    /// Set the number of numbered page buttons
    pub fn with_max_buttons(mut self, max_buttons: usize) -> Self {
        self.max_buttons = max_buttons.max(1);
        self
    }

    /// Set the initial filters
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Current page position
    pub fn state(&self) -> PageState {
        self.state
    }

    /// Active filters
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the active filters; applies to the already-fetched page
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "filters changed");
        self.criteria = criteria;
    }

    /// All records of the current page, unfiltered
    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    /// Records of the current page that pass the filters
    pub fn visible(&self) -> Vec<CommitRecord> {
        filter(&self.records, &self.criteria)
    }

    /// Pagination controls for the current position
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state, self.max_buttons)
    }

    /// Snapshot of everything the view shows
    pub fn view(&self) -> PageView {
        let pagination = self.pagination();
        PageView {
            records: self.visible(),
            page: self.state.current_page,
            page_size: self.state.page_size,
            total_count: self.state.total_count,
            total_pages: pagination.total_pages,
            pages: pagination.items,
            has_previous: pagination.has_previous,
            has_next: pagination.has_next,
            filtered: !self.criteria.is_empty(),
        }
    }

    /// Issue a request for `page`, superseding any request still in flight.
    ///
    /// Once a total is known the page is clamped into range.
    pub fn begin(&mut self, page: usize) -> PageRequest {
        let page = if self.loaded {
            self.state.clamp(page)
        } else {
            page.max(1)
        };

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.latest = Some(id);

        debug!(request = self.next_id, page, "page request issued");
        PageRequest {
            id,
            page,
            page_size: self.state.page_size,
        }
    }

    /// Apply the result of a fetch issued by [`begin`](Self::begin).
    ///
    /// Results of superseded requests are dropped, errors included.
    pub fn complete(&mut self, request: PageRequest, result: Result<FetchedPage>) -> Result<Applied> {
        if self.latest != Some(request.id) {
            debug!(request = request.id.0, page = request.page, "dropping stale page response");
            return Ok(Applied::Stale);
        }

        let fetched = result.inspect_err(|e| warn!(error = %e, page = request.page, "page fetch failed"))?;

        self.records = parse_lines(fetched.lines.iter().map(String::as_str));
        self.state.total_count = fetched.total_count;
        // An empty history has a single, empty page.
        self.state.current_page = if self.state.total_pages() == 0 { 1 } else { request.page };
        self.loaded = true;

        Ok(Applied::Current)
    }

    /// Fetch and show `page`
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load(&mut self, page: usize) -> Result<()> {
        self.fetch(page).await?;

        // A first request past the end lands on the last page instead.
        let total_pages = self.state.total_pages();
        if total_pages > 0 && self.state.current_page > total_pages {
            debug!(requested = page, total_pages, "page out of range, loading last page");
            self.fetch(total_pages).await?;
        }

        info!(
            page = self.state.current_page,
            total_pages = self.state.total_pages(),
            records = self.records.len(),
            "changelog page loaded"
        );
        Ok(())
    }

    /// Go to the next page; returns false when already on the last page
    pub async fn next(&mut self) -> Result<bool> {
        if !self.state.has_next() {
            return Ok(false);
        }
        self.load(self.state.current_page + 1).await?;
        Ok(true)
    }

    /// Go to the previous page; returns false when already on page 1
    pub async fn previous(&mut self) -> Result<bool> {
        if !self.state.has_previous() {
            return Ok(false);
        }
        self.load(self.state.current_page - 1).await?;
        Ok(true)
    }

    async fn fetch(&mut self, page: usize) -> Result<Applied> {
        let request = self.begin(page);
        let result = self.source.fetch_page(request.page, request.page_size).await;
        self.complete(request, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DateRange;
    use crate::formatter::render_summary;
    use crate::types::Category;
    use logbook_git::StaticLogSource;

    fn history(count: usize) -> StaticLogSource {
        StaticLogSource::new((1..=count).map(|i| {
            let message = if i % 2 == 0 { "feat: add thing" } else { "fix: repair thing" };
            format!("h{:03}|Alice|2024-01-{:02}|{} {}", i, (i % 28) + 1, message, i)
        }))
    }

    #[tokio::test]
    async fn test_load_first_page() {
        let mut session = ChangelogSession::new(history(23), 10);
        session.load(1).await.unwrap();

        assert_eq!(session.records().len(), 10);
        assert_eq!(session.state().total_count, 23);
        assert_eq!(session.state().total_pages(), 3);
        assert_eq!(session.records()[0].hash, "h001");
        assert_eq!(session.records()[0].category, Category::Fix);
    }

    #[tokio::test]
    async fn test_page_change_refetches() {
        let mut session = ChangelogSession::new(history(23), 10);
        session.load(1).await.unwrap();

        assert!(session.next().await.unwrap());
        assert_eq!(session.state().current_page, 2);
        assert_eq!(session.records()[0].hash, "h011");

        assert!(session.next().await.unwrap());
        assert_eq!(session.records().len(), 3);
        assert!(!session.next().await.unwrap());

        assert!(session.previous().await.unwrap());
        assert_eq!(session.state().current_page, 2);
    }

    #[tokio::test]
    async fn test_previous_disabled_on_first_page() {
        let mut session = ChangelogSession::new(history(5), 10);
        session.load(1).await.unwrap();
        assert!(!session.previous().await.unwrap());
        assert!(!session.next().await.unwrap());
        assert!(!session.pagination().is_visible());
    }

    #[tokio::test]
    async fn test_out_of_range_request_lands_on_last_page() {
        let mut session = ChangelogSession::new(history(23), 10);
        session.load(9).await.unwrap();
        assert_eq!(session.state().current_page, 3);
        assert_eq!(session.records().len(), 3);

        session.load(0).await.unwrap();
        assert_eq!(session.state().current_page, 1);
    }

    #[tokio::test]
    async fn test_filters_apply_to_fetched_page() {
        let mut session = ChangelogSession::new(history(10), 10);
        session.load(1).await.unwrap();

        session.set_filter(FilterCriteria::new().with_category(Category::Feature));
        let visible = session.visible();
        assert_eq!(visible.len(), 5);
        assert!(visible.iter().all(|r| r.category == Category::Feature));

        let view = session.view();
        assert!(view.filtered);
        assert_eq!(view.total_count, 10);
    }

    #[tokio::test]
    async fn test_empty_filter_result_keeps_pagination() {
        let mut session = ChangelogSession::new(history(30), 10);
        session.load(2).await.unwrap();

        let range = DateRange::parse(Some("2030-01-01"), None).unwrap();
        session.set_filter(FilterCriteria::new().with_date_range(range));
        let view = session.view();
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.pages.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let mut session = ChangelogSession::new(StaticLogSource::default(), 10);
        session.load(1).await.unwrap();
        let view = session.view();
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(view.pages.is_empty());
    }

    #[tokio::test]
    async fn test_empty_history_lands_on_first_page() {
        let mut session = ChangelogSession::new(StaticLogSource::default(), 10);
        session.load(7).await.unwrap();

        let view = session.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 0);
        assert!(!view.has_previous);
        assert!(!view.has_next);
    }

    #[tokio::test]
    async fn test_huge_page_request_renders_summary() {
        let mut session = ChangelogSession::new(StaticLogSource::default(), 10);
        session.load(usize::MAX).await.unwrap();
        assert_eq!(render_summary(&session.view()), "0 commits");

        let mut session = ChangelogSession::new(history(23), 10);
        session.load(usize::MAX).await.unwrap();
        assert_eq!(session.state().current_page, 3);
        assert_eq!(render_summary(&session.view()), "Showing 21-23 of 23 commits");
    }

    #[tokio::test]
    async fn test_source_failure_is_reported() {
        let mut session = ChangelogSession::new(StaticLogSource::failing("no history"), 10);
        assert!(session.load(1).await.is_err());
        assert!(session.records().is_empty());
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let source = history(30);
        let mut session = ChangelogSession::new(history(30), 10);
        session.load(1).await.unwrap();

        let slow = session.begin(2);
        let fast = session.begin(3);

        let fast_result = source.fetch_page(fast.page, fast.page_size).await;
        assert_eq!(session.complete(fast, fast_result).unwrap(), Applied::Current);
        assert_eq!(session.state().current_page, 3);

        let slow_result = source.fetch_page(slow.page, slow.page_size).await;
        assert_eq!(session.complete(slow, slow_result).unwrap(), Applied::Stale);
        assert_eq!(session.state().current_page, 3);
        assert_eq!(session.records()[0].hash, "h021");
    }

    #[tokio::test]
    async fn test_stale_error_is_dropped() {
        let mut session = ChangelogSession::new(history(30), 10);
        session.load(1).await.unwrap();

        let stale = session.begin(2);
        let _latest = session.begin(3);
        let failure = StaticLogSource::failing("boom").fetch_page(2, 10).await;
        assert_eq!(session.complete(stale, failure).unwrap(), Applied::Stale);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut session = ChangelogSession::new(history(3), 10);
        let first = session.begin(1);
        let second = session.begin(1);
        assert!(second.id > first.id);
    }
}
