//! Markdown page formatter

use logbook_core::config::OutputConfig;
use tracing::{debug, instrument};

use super::{render_page_bar, render_summary, PageFormatter, EMPTY_STATE};
use crate::session::PageView;

/// Markdown formatter for documentation pages
pub struct MarkdownFormatter {
    /// Page title
    pub title: String,
    /// Repository URL for commit links
    pub repo_url: Option<String>,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            title: "Changelog".to_string(),
            repo_url: None,
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set repository URL for links
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFormatter for MarkdownFormatter {
    #[instrument(skip(self, view, config), fields(page = view.page, record_count = view.records.len()))]
    fn format(&self, view: &PageView, config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", self.title));
        output.push_str(&format!("_{}_\n\n", render_summary(view)));

        if view.is_empty() {
            output.push_str(&format!("{}\n", EMPTY_STATE));
        }

        for record in &view.records {
            output.push_str(&format!("- **{}** {}", record.category.label(), record.message));

            if config.show_hashes && !record.hash.is_empty() {
                match &self.repo_url {
                    Some(repo_url) => output.push_str(&format!(
                        " ([`{}`]({}/commit/{}))",
                        record.hash, repo_url, record.hash
                    )),
                    None => output.push_str(&format!(" (`{}`)", record.hash)),
                }
            }

            if !record.date.is_empty() {
                output.push_str(&format!(" - {}", record.date));
            }

            if config.show_authors && !record.author.is_empty() {
                output.push_str(&format!(" by {}", record.author));
            }

            output.push('\n');
        }

        if let Some(bar) = render_page_bar(&view.pagination()) {
            output.push_str(&format!("\n{}\n", bar));
        }

        debug!(output_len = output.len(), "markdown page formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
