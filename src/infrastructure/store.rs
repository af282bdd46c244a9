//! Storage abstractions for credentials and journal entries

use crate::domain::{DateRange, EntryId, JournalEntry, User};
use crate::error::Result;

/// Registers users and verifies their credentials
pub trait CredentialStore {
    /// Store a new user with a salted hash of `password`.
    /// Fails with `DuplicateUser` if the name is taken.
    fn register(&self, username: &str, password: &str) -> Result<User>;

    /// Return the user if `password` matches. Unknown users and wrong
    /// passwords both fail with `AuthFailure`.
    fn authenticate(&self, username: &str, password: &str) -> Result<User>;
}

/// Entry persistence. Every call is scoped to an owner; ids belonging to
/// another owner behave exactly like ids that do not exist.
pub trait JournalStore {
    /// Persist a new entry, assigning its id and creation timestamp
    fn create(&self, owner: &str, text: &str, attachment_ref: Option<&str>)
        -> Result<JournalEntry>;

    fn get(&self, owner: &str, id: EntryId) -> Result<JournalEntry>;

    /// All entries of `owner`, ascending by id
    fn list(&self, owner: &str) -> Result<Vec<JournalEntry>>;

    /// Replace the text of an entry, leaving every other field untouched
    fn update(&self, owner: &str, id: EntryId, new_text: &str) -> Result<JournalEntry>;

    fn delete(&self, owner: &str, id: EntryId) -> Result<()>;

    fn count(&self, owner: &str) -> Result<usize>;

    /// Entries whose creation date lies in `range`, ascending by id
    fn search(&self, owner: &str, range: &DateRange) -> Result<Vec<JournalEntry>>;
}
