//! Log command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use logbook_changelog::formatter::{render_page_bar, render_summary, EMPTY_STATE};
use logbook_changelog::{
    CategoryFilter, ChangelogSession, DateRange, FilterCriteria, MarkdownFormatter, PageFormatter,
    PageView, TextFormatter,
};
use logbook_core::config::{load_config_or_default, Config, OutputConfig};
use logbook_core::FilterError;
use logbook_git::{GitLogSource, LogSource, StaticLogSource};

use crate::cli::output::{self, category_style, hash_style, path_style};
use crate::cli::{Cli, OutputFormat};

/// Show a page of the classified commit history
#[derive(Debug, Args)]
pub struct LogCommand {
    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Commits per page (defaults to the configured page size)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Only show one category (feature, fix, docs, chore, refactor, test, style, other, all)
    #[arg(long)]
    pub category: Option<String>,

    /// Only show commits whose message, author or hash contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Earliest commit date to show (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub since: Option<String>,

    /// Latest commit date to show (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub until: Option<String>,

    /// Revision whose history is listed (defaults to the configured revision)
    #[arg(short, long)]
    pub revision: Option<String>,

    /// Read an exported `%h|%an|%ad|%s` log instead of running git
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Heading of the markdown page
    #[arg(long, default_value = "Changelog")]
    pub title: String,

    /// Repository URL used to link commit hashes in markdown output
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Write the page to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl LogCommand {
    /// Execute the log command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(page = self.page, category = ?self.category, search = ?self.search, "executing log command");
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async(cli))
    }

    async fn execute_async(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        // Reject malformed filters before touching the history.
        let criteria = self.criteria()?;

        match &self.from_file {
            Some(path) => {
                let source = StaticLogSource::from_file(path)?;
                self.show(cli, &config, source, criteria).await
            }
            None => {
                let mut source = GitLogSource::from_config(&config.source, &cwd);
                if let Some(revision) = &self.revision {
                    source = source.with_revision(revision);
                }
                self.show(cli, &config, source, criteria).await
            }
        }
    }

    /// Build filter criteria from the command-line flags
    fn criteria(&self) -> Result<FilterCriteria, FilterError> {
        let mut criteria = FilterCriteria::new();

        if let Some(category) = &self.category {
            criteria = criteria.with_category(category.parse::<CategoryFilter>()?);
        }

        if let Some(search) = &self.search {
            criteria = criteria.with_search(search.clone());
        }

        if self.since.is_some() || self.until.is_some() {
            let range = DateRange::parse(self.since.as_deref(), self.until.as_deref())?;
            criteria = criteria.with_date_range(range);
        }

        Ok(criteria)
    }

    fn page_size(&self, config: &Config) -> usize {
        self.page_size
            .map(|size| size as usize)
            .unwrap_or(config.pagination.page_size)
    }

    async fn show<S: LogSource>(
        &self,
        cli: &Cli,
        config: &Config,
        source: S,
        criteria: FilterCriteria,
    ) -> anyhow::Result<()> {
        let mut session = ChangelogSession::new(source, self.page_size(config))
            .with_max_buttons(config.pagination.max_buttons)
            .with_criteria(criteria);

        session.load(self.page).await?;
        let view = session.view();

        if view.page != self.page && !cli.quiet {
            output::warning(&format!(
                "Page {} is out of range, showing page {} of {}",
                self.page,
                view.page,
                view.total_pages.max(1)
            ));
        }

        match cli.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&view)?;
                self.emit(cli, &format!("{}\n", json), "json")
            }
            OutputFormat::Text if self.output.is_none() && console::user_attended() => {
                print_text(&view, &config.output, cli.quiet);
                Ok(())
            }
            format => {
                let formatter = self.formatter(format);
                let rendered = formatter.format(&view, &config.output);
                self.emit(cli, &rendered, formatter.extension())
            }
        }
    }

    fn formatter(&self, format: OutputFormat) -> Box<dyn PageFormatter> {
        match format {
            OutputFormat::Markdown => Box::new(self.markdown_formatter()),
            _ => Box::new(TextFormatter::new()),
        }
    }

    fn markdown_formatter(&self) -> MarkdownFormatter {
        let formatter = MarkdownFormatter::new().with_title(self.title.as_str());
        match &self.repo_url {
            Some(url) => formatter.with_repo_url(url.as_str()),
            None => formatter,
        }
    }

    /// Print the rendered page, or write it to `--output`
    fn emit(&self, cli: &Cli, rendered: &str, extension: &str) -> anyhow::Result<()> {
        let Some(path) = &self.output else {
            print!("{}", rendered);
            return Ok(());
        };

        let path = output_path(path, extension);
        std::fs::write(&path, rendered)?;
        info!(path = %path.display(), "changelog page written");

        if !cli.quiet {
            output::success(&format!(
                "Changelog page written to {}",
                path_style().apply_to(path.display())
            ));
        }
        Ok(())
    }
}

/// Add the format's extension when the path has none
fn output_path(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// Print a page with terminal styling
fn print_text(view: &PageView, config: &OutputConfig, quiet: bool) {
    if !quiet {
        println!("{}", output::header(&render_summary(view)));
        println!();
    }

    if view.is_empty() {
        if !quiet {
            println!("{}", style(EMPTY_STATE).yellow());
        }
        return;
    }

    for line in view.records.iter().map(|record| styled_line(record, config)) {
        println!("{}", line);
    }

    if quiet {
        return;
    }

    if let Some(bar) = render_page_bar(&view.pagination()) {
        println!();
        println!("{}", style(bar).dim());
    }
}

fn styled_line(record: &logbook_changelog::CommitRecord, config: &OutputConfig) -> String {
    let mut line = String::new();
    if config.show_hashes {
        line.push_str(&format!("{} ", hash_style().apply_to(format!("{:<9}", record.hash))));
    }
    line.push_str(&format!(
        "{}  {}  {}",
        style(format!("{:<10}", record.date)).dim(),
        category_style(record.category).apply_to(format!("{:<8}", record.category)),
        record.message
    ));
    if config.show_authors && !record.author.is_empty() {
        line.push_str(&format!("  {}", style(format!("({})", record.author)).dim()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use logbook_changelog::{parse_line, Category};

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        log: LogCommand,
    }

    fn command(args: &[&str]) -> LogCommand {
        let mut argv = vec!["log"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().log
    }

    #[test]
    fn test_no_flags_means_no_filters() {
        let criteria = command(&[]).criteria().unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_flags_build_criteria() {
        let criteria = command(&[
            "--category",
            "feat",
            "--search",
            "login",
            "--since",
            "2024-01-01",
            "--until",
            "2024-01-31",
        ])
        .criteria()
        .unwrap();

        assert_eq!(criteria.category, CategoryFilter::Only(Category::Feature));
        assert_eq!(criteria.search_text, "login");
        let range = criteria.date_range.unwrap();
        assert!(range.contains("2024-01-31"));
        assert!(!range.contains("2024-02-01"));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = command(&["--since", "01/02/2024"]).criteria().unwrap_err();
        assert!(matches!(err, FilterError::InvalidDate { .. }));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = command(&["--category", "perf"]).criteria().unwrap_err();
        assert!(matches!(err, FilterError::UnknownCategory(_)));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert!(Harness::try_parse_from(["log", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_page_size_falls_back_to_config() {
        let mut config = Config::default();
        config.pagination.page_size = 25;
        assert_eq!(command(&[]).page_size(&config), 25);
        assert_eq!(command(&["--page-size", "5"]).page_size(&config), 5);
    }

    #[test]
    fn test_markdown_flags_configure_formatter() {
        let formatter = command(&["--title", "Site history", "--repo-url", "https://example.com/site/"])
            .markdown_formatter();
        assert_eq!(formatter.title, "Site history");
        assert_eq!(formatter.repo_url.as_deref(), Some("https://example.com/site"));

        let defaults = command(&[]).markdown_formatter();
        assert_eq!(defaults.title, "Changelog");
        assert!(defaults.repo_url.is_none());
    }

    #[test]
    fn test_output_path_gets_format_extension() {
        let cmd = command(&[]);
        assert_eq!(cmd.formatter(OutputFormat::Markdown).extension(), "md");
        assert_eq!(
            output_path(Path::new("CHANGES"), cmd.formatter(OutputFormat::Markdown).extension()),
            PathBuf::from("CHANGES.md")
        );
        assert_eq!(output_path(Path::new("page.txt"), "md"), PathBuf::from("page.txt"));
    }

    #[test]
    fn test_styled_line_contains_fields() {
        console::set_colors_enabled(false);
        let record = parse_line("abc123|Alice|2024-01-05|feat: add login");
        let line = styled_line(&record, &OutputConfig::default());
        assert!(line.contains("abc123"));
        assert!(line.contains("2024-01-05"));
        assert!(line.contains("feature"));
        assert!(line.contains("feat: add login"));
        assert!(line.contains("(Alice)"));
    }
}
