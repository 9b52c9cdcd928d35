//! Changelog page formatters

mod markdown;
mod text;

pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use logbook_core::config::OutputConfig;

use crate::paginator::{PageItem, Pagination};
use crate::session::PageView;

/// Message shown when a page has no records to display
pub const EMPTY_STATE: &str = "No commits match the current filters.";

/// Trait for page formatters
pub trait PageFormatter: Send + Sync {
    /// Format one changelog page to string
    fn format(&self, view: &PageView, config: &OutputConfig) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Render the pagination bar, e.g. `« Prev  1 … 4 5 [6] 7 8 … 12  Next »`.
///
/// Returns `None` when pagination is hidden.
pub fn render_page_bar(pagination: &Pagination) -> Option<String> {
    if !pagination.is_visible() {
        return None;
    }

    let buttons: Vec<String> = pagination
        .items
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == pagination.state.current_page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();

    let previous = if pagination.has_previous { "« Prev" } else { "  " };
    let next = if pagination.has_next { "Next »" } else { "" };

    Some(format!("{}  {}  {}", previous, buttons.join(" "), next).trim().to_string())
}

/// Render the "Showing X-Y of Z commits" summary
pub fn render_summary(view: &PageView) -> String {
    match view.pagination().state.item_window() {
        Some((first, last)) => format!("Showing {}-{} of {} commits", first, last, view.total_count),
        None => format!("{} commits", view.total_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::PageState;

    fn pagination(current_page: usize, total_count: usize) -> Pagination {
        Pagination::new(
            PageState {
                current_page,
                page_size: 10,
                total_count,
            },
            5,
        )
    }

    #[test]
    fn test_page_bar_middle() {
        let bar = render_page_bar(&pagination(6, 115)).unwrap();
        assert_eq!(bar, "« Prev  1 … 4 5 [6] 7 8 … 12  Next »");
    }

    #[test]
    fn test_page_bar_first_page() {
        let bar = render_page_bar(&pagination(1, 30)).unwrap();
        assert_eq!(bar, "[1] 2 3  Next »");
    }

    #[test]
    fn test_page_bar_hidden_for_single_page() {
        assert!(render_page_bar(&pagination(1, 7)).is_none());
        assert!(render_page_bar(&pagination(1, 0)).is_none());
    }
}
