//! Logbook Changelog - Commit log parsing, classification and presentation
//!
//! This crate turns formatted log lines into classified commit records,
//! filters them, computes pagination and renders changelog pages.

pub mod classifier;
pub mod filter;
pub mod formatter;
pub mod paginator;
pub mod parser;
pub mod session;
pub mod types;

pub use classifier::classify;
pub use filter::{filter, DateRange, FilterCriteria};
pub use formatter::{MarkdownFormatter, PageFormatter, TextFormatter};
pub use paginator::{visible_page_numbers, PageItem, PageState, Pagination};
pub use parser::{parse, parse_line};
pub use session::{Applied, ChangelogSession, PageRequest, PageView, RequestId};
pub use types::{Category, CategoryFilter, CommitRecord};
