//! Commit classification
//!
//! Maps a free-text subject line to a [`Category`]. Rules are evaluated in a
//! fixed order and the first match wins, so a subject mentioning several
//! keyword families ("fix docs typo") always lands in the same category.

use crate::types::Category;

/// Conventional-commit type keywords, highest priority first
const CONVENTIONAL_KEYWORDS: [(&str, Category); 7] = [
    ("feat", Category::Feature),
    ("fix", Category::Fix),
    ("docs", Category::Docs),
    ("chore", Category::Chore),
    ("refactor", Category::Refactor),
    ("test", Category::Test),
    ("style", Category::Style),
];

/// Loose substring hints for subjects without a conventional prefix
const HINT_KEYWORDS: [(&[&str], Category); 4] = [
    (&["add", "new", "implement"], Category::Feature),
    (&["fix", "bug", "issue"], Category::Fix),
    (&["document", "readme", "comment"], Category::Docs),
    (&["clean", "update", "upgrade"], Category::Chore),
];

/// Classify a commit subject
pub fn classify(message: &str) -> Category {
    let message = message.to_lowercase();

    for (keyword, category) in CONVENTIONAL_KEYWORDS {
        if message.starts_with(keyword) || message.contains(&format!(": {}", keyword)) {
            return category;
        }
    }

    for (hints, category) in HINT_KEYWORDS {
        if hints.iter().any(|hint| message.contains(hint)) {
            return category;
        }
    }

    Category::Other
}
