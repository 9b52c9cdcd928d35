//! Changelog types

use logbook_core::error::FilterError;
use serde::{Deserialize, Serialize};

/// One commit parsed from a formatted log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Short commit hash
    pub hash: String,
    /// Author display name
    pub author: String,
    /// Commit date as emitted by the source (`YYYY-MM-DD`)
    pub date: String,
    /// Subject line
    pub message: String,
    /// Category derived from the subject
    pub category: Category,
}

/// Commit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New feature
    Feature,
    /// Bug fix
    Fix,
    /// Documentation
    Docs,
    /// Chores (maintenance)
    Chore,
    /// Refactoring
    Refactor,
    /// Tests
    Test,
    /// Code style (formatting, etc.)
    Style,
    /// Anything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Self::Feature,
        Self::Fix,
        Self::Docs,
        Self::Chore,
        Self::Refactor,
        Self::Test,
        Self::Style,
        Self::Other,
    ];

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Chore => "chore",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Style => "style",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Feature => "Features",
            Self::Fix => "Bug Fixes",
            Self::Docs => "Documentation",
            Self::Chore => "Chores",
            Self::Refactor => "Code Refactoring",
            Self::Test => "Tests",
            Self::Style => "Styles",
            Self::Other => "Other Changes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feature" | "feat" => Ok(Self::Feature),
            "fix" | "bugfix" => Ok(Self::Fix),
            "docs" | "doc" => Ok(Self::Docs),
            "chore" => Ok(Self::Chore),
            "refactor" => Ok(Self::Refactor),
            "test" | "tests" => Ok(Self::Test),
            "style" => Ok(Self::Style),
            "other" => Ok(Self::Other),
            _ => Err(FilterError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category part of the filter criteria
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category filter
    #[default]
    All,
    /// Keep a single category
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a category passes
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("feat".parse::<Category>().unwrap(), Category::Feature);
        assert_eq!("Feature".parse::<Category>().unwrap(), Category::Feature);
        assert_eq!("docs".parse::<Category>().unwrap(), Category::Docs);
        assert!("perf".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        let only_fix: CategoryFilter = "fix".parse().unwrap();
        assert!(only_fix.matches(Category::Fix));
        assert!(!only_fix.matches(Category::Feature));
        assert!(CategoryFilter::All.matches(Category::Other));
    }

    #[test]
    fn test_record_serializes_lowercase_category() {
        let record = CommitRecord {
            hash: "abc123".to_string(),
            author: "Alice".to_string(),
            date: "2024-01-05".to_string(),
            message: "feat: add login".to_string(),
            category: Category::Feature,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["category"], "feature");
    }
}
