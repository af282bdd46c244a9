//! Journal entries

use chrono::{NaiveDate, NaiveDateTime};

/// Storage format of `created_at` (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Store-assigned entry identifier. Never reused.
pub type EntryId = i64;

/// A single dated diary record owned by one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub owner: String,
    pub text: String,
    /// Opaque reference to an externally stored attachment, kept verbatim.
    pub attachment_ref: Option<String>,
    /// `None` only for legacy rows whose date column is empty or malformed.
    pub created_at: Option<NaiveDateTime>,
}

impl JournalEntry {
    /// Calendar date of creation, ignoring time of day
    pub fn date(&self) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.date())
    }
}

/// Parse a stored timestamp. Accepts a bare `YYYY-MM-DD` as midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format a timestamp the way it is stored
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
