//! Output formatting utilities

use console::{style, Style};

use logbook_changelog::Category;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Style for a commit category badge
pub fn category_style(category: Category) -> Style {
    match category {
        Category::Feature => Style::new().green().bold(),
        Category::Fix => Style::new().red(),
        Category::Docs => Style::new().blue(),
        Category::Chore => Style::new().dim(),
        Category::Refactor => Style::new().magenta(),
        Category::Test => Style::new().yellow(),
        Category::Style => Style::new().cyan(),
        Category::Other => Style::new(),
    }
}

/// Style for commit hashes
pub fn hash_style() -> Style {
    Style::new().yellow()
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}
