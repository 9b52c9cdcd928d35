//! Pagination state and page-button layout

use logbook_git::skip_for;
use serde::{Deserialize, Serialize};

/// Default number of commits per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of numbered buttons in the sliding window
pub const DEFAULT_MAX_BUTTONS: usize = 5;

/// Position within a paginated history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based current page
    pub current_page: usize,
    /// Items per page, always positive
    pub page_size: usize,
    /// Total number of items reported by the source
    pub total_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Start at page 1 with nothing known about the total
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    /// Number of pages, zero when there are no items
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    /// Entries bypassed before the current page
    pub fn skip(&self) -> usize {
        skip_for(self.current_page, self.page_size)
    }

    /// Clamp a requested page into `[1, total_pages]`.
    ///
    /// With no pages known yet the result is 1.
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Check if a previous page exists
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Check if a next page exists
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 1-based numbers of the first and last items on the current page.
    ///
    /// `None` when the current page holds no items.
    pub fn item_window(&self) -> Option<(usize, usize)> {
        let skip = self.skip();
        if skip >= self.total_count {
            return None;
        }
        let last = skip.saturating_add(self.page_size).min(self.total_count);
        Some((skip + 1, last))
    }
}

/// One entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageItem {
    /// A numbered page button
    Page(usize),
    /// A gap of skipped page numbers
    Ellipsis,
}

/// Lay out the numbered page buttons around `current_page`.
///
/// Returns nothing when there is at most one page. Otherwise a window of up
/// to `max_buttons` pages centred on the current page, with the first and
/// last page pinned at the edges and an ellipsis wherever pages are skipped.
pub fn visible_page_numbers(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let max_buttons = max_buttons.max(1);
    if total_pages <= max_buttons {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let mut start = current_page.saturating_sub(max_buttons / 2).max(1);
    let mut end = start.saturating_add(max_buttons - 1);
    if end > total_pages {
        end = total_pages;
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }

    let mut items = Vec::with_capacity(max_buttons + 4);

    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }

    items
}

/// Everything a presentation layer needs to draw pagination controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current position
    pub state: PageState,
    /// Total number of pages
    pub total_pages: usize,
    /// Page buttons, empty when no controls should be shown
    pub items: Vec<PageItem>,
    /// Whether "Previous" is enabled
    pub has_previous: bool,
    /// Whether "Next" is enabled
    pub has_next: bool,
}

impl Pagination {
    /// Compute the controls for a page state
    pub fn new(state: PageState, max_buttons: usize) -> Self {
        let total_pages = state.total_pages();
        Self {
            state,
            total_pages,
            items: visible_page_numbers(state.current_page, total_pages, max_buttons),
            has_previous: state.has_previous(),
            has_next: state.has_next(),
        }
    }

    /// Check if pagination controls should be shown at all
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}
