//! Date range search use case

use crate::domain::{DateRange, JournalEntry, Session};
use crate::error::Result;
use crate::infrastructure::JournalStore;

/// Entries of the session user created between `start` and `end` inclusive.
/// Bounds are validated before the store is queried.
pub fn search_entries<S: JournalStore>(
    store: &S,
    session: &Session,
    start: &str,
    end: &str,
) -> Result<Vec<JournalEntry>> {
    let range = DateRange::parse(start, end)?;
    store.search(session.owner(), &range)
}
