//! Entry use cases scoped to a logged-in session

use crate::domain::{EntryId, JournalEntry, Session};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use tracing::debug;

/// One page of a user's entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<JournalEntry>,
    /// Zero-based
    pub index: usize,
    pub total_pages: usize,
    pub total_entries: usize,
}

/// Service for reading and writing the session user's entries
pub struct EntryService<'a, S: JournalStore> {
    store: &'a S,
}

impl<'a, S: JournalStore> EntryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        EntryService { store }
    }

    pub fn create(
        &self,
        session: &Session,
        text: &str,
        attachment_ref: Option<&str>,
    ) -> Result<JournalEntry> {
        self.store.create(session.owner(), text, attachment_ref)
    }

    pub fn list(&self, session: &Session) -> Result<Vec<JournalEntry>> {
        self.store.list(session.owner())
    }

    pub fn count(&self, session: &Session) -> Result<usize> {
        self.store.count(session.owner())
    }

    pub fn update(&self, session: &Session, id: EntryId, new_text: &str) -> Result<JournalEntry> {
        self.store.update(session.owner(), id, new_text)
    }

    /// Delete an entry and pull the page cursor back if its page disappeared
    pub fn delete(&self, session: &mut Session, id: EntryId) -> Result<()> {
        self.store.delete(session.owner(), id)?;
        let count = self.store.count(session.owner())?;
        session.cursor.clamp(count);
        Ok(())
    }

    /// Entries on the session's current page
    pub fn page(&self, session: &mut Session) -> Result<Page> {
        let entries = self.list(session)?;
        session.cursor.clamp(entries.len());

        let page = Page {
            entries: session.cursor.slice(&entries).to_vec(),
            index: session.cursor.index(),
            total_pages: session.cursor.total_pages(entries.len()),
            total_entries: entries.len(),
        };
        debug!(
            page = page.index,
            total_pages = page.total_pages,
            "Loaded page"
        );
        Ok(page)
    }

    /// Jump to a zero-based page, clamped to the pages available
    pub fn seek_page(&self, session: &mut Session, index: usize) -> Result<Page> {
        let count = self.count(session)?;
        session.cursor.seek(index, count);
        self.page(session)
    }

    pub fn next_page(&self, session: &mut Session) -> Result<Page> {
        let count = self.count(session)?;
        session.cursor.next(count);
        self.page(session)
    }

    pub fn previous_page(&self, session: &mut Session) -> Result<Page> {
        session.cursor.previous();
        self.page(session)
    }
}
