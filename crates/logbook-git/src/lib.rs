//! Logbook Git - Commit history retrieval
//!
//! This crate obtains pages of formatted commit log lines and the total
//! commit count, either by shelling out to `git` or from an in-memory copy.

mod commits;
mod memory;
mod repository;
mod source;
pub mod types;

pub use memory::StaticLogSource;
pub use repository::{GitLogSource, Result};
pub use source::LogSource;
pub use types::{skip_for, FetchedPage, FIELD_DELIMITER, LOG_FORMAT};
