//! Log line parsing
//!
//! Turns `<hash>|<author>|<date>|<subject>` lines into [`CommitRecord`]s.
//! Parsing is permissive: a short line yields empty trailing fields instead
//! of aborting the batch.

use logbook_git::FIELD_DELIMITER;
use tracing::debug;

use crate::classifier::classify;
use crate::types::CommitRecord;

/// Parse raw log text, one record per non-blank line
pub fn parse(raw: &str) -> Vec<CommitRecord> {
    parse_lines(raw.lines())
}

/// Parse already-split log lines, skipping blank ones
pub fn parse_lines<'a, I>(lines: I) -> Vec<CommitRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parse a single log line.
///
/// Only the first three delimiters separate fields; the subject keeps any
/// delimiters it contains.
pub fn parse_line(line: &str) -> CommitRecord {
    let mut fields = line.splitn(4, FIELD_DELIMITER);
    let hash = fields.next().unwrap_or_default();
    let author = fields.next();
    let date = fields.next();
    let message = fields.next();

    if message.is_none() {
        debug!(line, "malformed log line, missing trailing fields");
    }

    let message = message.unwrap_or_default().to_string();
    CommitRecord {
        hash: hash.to_string(),
        author: author.unwrap_or_default().to_string(),
        date: date.unwrap_or_default().to_string(),
        category: classify(&message),
        message,
    }
}
