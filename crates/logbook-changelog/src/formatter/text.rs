//! Plain text page formatter

use logbook_core::config::OutputConfig;

use super::{render_page_bar, render_summary, PageFormatter, EMPTY_STATE};
use crate::session::PageView;
use crate::types::CommitRecord;

/// Plain text formatter, one commit per line
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self
    }

    fn format_record(record: &CommitRecord, config: &OutputConfig) -> String {
        let mut line = String::new();
        if config.show_hashes {
            line.push_str(&format!("{:<9} ", record.hash));
        }
        line.push_str(&format!("{:<10}  {:<8}  {}", record.date, record.category, record.message));
        if config.show_authors && !record.author.is_empty() {
            line.push_str(&format!("  ({})", record.author));
        }
        line
    }
}

impl PageFormatter for TextFormatter {
    fn format(&self, view: &PageView, config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&render_summary(view));
        output.push_str("\n\n");

        if view.is_empty() {
            output.push_str(EMPTY_STATE);
            output.push('\n');
        } else {
            for record in &view.records {
                output.push_str(&Self::format_record(record, config));
                output.push('\n');
            }
        }

        if let Some(bar) = render_page_bar(&view.pagination()) {
            output.push('\n');
            output.push_str(&bar);
            output.push('\n');
        }

        output
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
