//! Record filtering by category, text and date range

use chrono::{Days, NaiveDate};
use logbook_core::error::FilterError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::{CategoryFilter, CommitRecord};

/// Format of record dates and date bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date kept
    pub start: Option<NaiveDate>,
    /// Latest date kept, including the whole day
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range from already-parsed bounds
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build a range from user input.
    ///
    /// Empty or whitespace-only strings disable that bound. Anything else
    /// must be a `YYYY-MM-DD` date, and the start may not come after the end.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, FilterError> {
        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;

        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(FilterError::InvertedRange {
                    start: s.to_string(),
                    end: e.to_string(),
                });
            }
        }

        Ok(Self { start, end })
    }

    /// Check if neither bound is active
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Check whether a record date string falls inside the range.
    ///
    /// A date that does not parse fails any active bound.
    pub fn contains(&self, date: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }

        let Ok(date) = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) else {
            return false;
        };

        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            // Keep everything before the start of the following day.
            match end.checked_add_days(Days::new(1)) {
                Some(next_day) if date >= next_day => return false,
                _ => {}
            }
        }

        true
    }
}

fn parse_bound(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FilterError::InvalidDate {
                field,
                value: value.to_string(),
            }),
    }
}

/// Filter criteria for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Category to keep
    pub category: CategoryFilter,
    /// Free-text search over message, author and hash
    pub search_text: String,
    /// Optional date bounds
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// Criteria that keep everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category filter
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the date range
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Check if no filter is active
    pub fn is_empty(&self) -> bool {
        self.category == CategoryFilter::All
            && self.search_text.trim().is_empty()
            && self.date_range.map_or(true, |r| r.is_unbounded())
    }

    /// Check whether a single record passes every active filter
    pub fn matches(&self, record: &CommitRecord) -> bool {
        if !self.category.matches(record.category) {
            return false;
        }

        let needle = self.search_text.trim().to_lowercase();
        if !needle.is_empty()
            && !record.message.to_lowercase().contains(&needle)
            && !record.author.to_lowercase().contains(&needle)
            && !record.hash.to_lowercase().contains(&needle)
        {
            return false;
        }

        match &self.date_range {
            Some(range) => range.contains(&record.date),
            None => true,
        }
    }
}

/// Keep the records matching `criteria`, preserving order
#[instrument(skip(records, criteria), fields(input = records.len()))]
pub fn filter(records: &[CommitRecord], criteria: &FilterCriteria) -> Vec<CommitRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    let kept: Vec<CommitRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    debug!(kept = kept.len(), "records filtered");
    kept
}
