//! SQLite-backed credential and journal store

use crate::domain::entry::{format_timestamp, parse_timestamp};
use crate::domain::{DateRange, EntryId, JournalEntry, User};
use crate::error::{DaybookError, Result};
use crate::infrastructure::{CredentialHasher, CredentialStore, JournalStore};
use chrono::{Local, NaiveDateTime, Timelike};
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info, warn};

const ENTRY_COLUMNS: &str = "rowid, username, entry, file_path, date";

type Clock = Box<dyn Fn() -> NaiveDateTime>;

/// Single-connection store. Each operation is one statement (or one
/// read-after-write on the same connection), so no explicit locking is needed.
pub struct SqliteStore {
    conn: Connection,
    hasher: CredentialHasher,
    clock: Clock,
}

impl SqliteStore {
    /// Open (creating if needed) the database file at `path` and migrate it
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self::from_connection(conn)?;
        info!("Database opened at {}", path.display());
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrate(&conn)?;
        Ok(SqliteStore {
            conn,
            hasher: CredentialHasher::default(),
            clock: Box::new(|| Local::now().naive_local()),
        })
    }

    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Replace the source of creation timestamps
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDateTime + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn now(&self) -> NaiveDateTime {
        let now = (self.clock)();
        now.with_nanosecond(0).unwrap_or(now)
    }

    fn query_entries(
        &self,
        filter: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<JournalEntry>> {
        let sql = format!(
            "SELECT {} FROM journals WHERE {} ORDER BY rowid",
            ENTRY_COLUMNS, filter
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params, entry_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            username    TEXT PRIMARY KEY,
            password    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS journals (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL,
            entry       TEXT NOT NULL DEFAULT '',
            file_path   TEXT,
            date        TEXT
        );
        ",
    )?;

    // Older databases were created before entries carried a date
    if !has_column(conn, "journals", "date")? {
        conn.execute("ALTER TABLE journals ADD COLUMN date TEXT", [])?;
        info!("Added date column to legacy journals table");
    }

    // Tables without an explicit id reuse the highest rowid after a delete
    if !has_column(conn, "journals", "id")? {
        rebuild_legacy_journals(conn)?;
    }

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_journals_username ON journals(username)",
        [],
    )?;

    debug!("Database migrations complete");
    Ok(())
}

fn rebuild_legacy_journals(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "
        CREATE TABLE journals_new (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL,
            entry       TEXT NOT NULL DEFAULT '',
            file_path   TEXT,
            date        TEXT
        );

        INSERT INTO journals_new (id, username, entry, file_path, date)
            SELECT rowid, COALESCE(username, ''), COALESCE(entry, ''), file_path, date
            FROM journals;

        DROP TABLE journals;
        ALTER TABLE journals_new RENAME TO journals;
        ",
    )?;
    tx.commit()?;
    info!("Rebuilt legacy journals table with stable ids");
    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(names.iter().any(|name| name == column))
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    let date: Option<String> = row.get(4)?;
    Ok(JournalEntry {
        id: row.get(0)?,
        owner: row.get(1)?,
        text: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        attachment_ref: row.get(3)?,
        created_at: date.as_deref().and_then(parse_timestamp),
    })
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

impl CredentialStore for SqliteStore {
    fn register(&self, username: &str, password: &str) -> Result<User> {
        let password_hash = self.hasher.hash(password)?;

        // Uniqueness is decided by the primary key at write time
        match self.conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            (username, &password_hash),
        ) {
            Ok(_) => {
                info!(username, "Registered user");
                Ok(User::new(username.to_string(), password_hash))
            }
            Err(e) if is_constraint_violation(&e) => {
                Err(DaybookError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT password FROM users WHERE username = ?1",
                [username],
                |row| row.get(0),
            )
            .optional()?;

        let Some(password_hash) = stored else {
            warn!("Login rejected");
            return Err(DaybookError::AuthFailure);
        };

        match self.hasher.verify(password, &password_hash) {
            Ok(true) => {
                debug!(username, "Login accepted");
                Ok(User::new(username.to_string(), password_hash))
            }
            Ok(false) => {
                warn!("Login rejected");
                Err(DaybookError::AuthFailure)
            }
            Err(e) => {
                warn!(username, "Stored credential is unreadable: {}", e);
                Err(DaybookError::AuthFailure)
            }
        }
    }
}

impl JournalStore for SqliteStore {
    fn create(
        &self,
        owner: &str,
        text: &str,
        attachment_ref: Option<&str>,
    ) -> Result<JournalEntry> {
        let created_at = self.now();
        self.conn.execute(
            "INSERT INTO journals (username, entry, file_path, date) VALUES (?1, ?2, ?3, ?4)",
            (owner, text, attachment_ref, format_timestamp(created_at)),
        )?;
        let id = self.conn.last_insert_rowid();
        info!(owner, id, "Created entry");

        Ok(JournalEntry {
            id,
            owner: owner.to_string(),
            text: text.to_string(),
            attachment_ref: attachment_ref.map(str::to_string),
            created_at: Some(created_at),
        })
    }

    fn get(&self, owner: &str, id: EntryId) -> Result<JournalEntry> {
        let sql = format!(
            "SELECT {} FROM journals WHERE rowid = ?1 AND username = ?2",
            ENTRY_COLUMNS
        );
        self.conn
            .query_row(&sql, (id, owner), entry_from_row)
            .optional()?
            .ok_or(DaybookError::NotFound(id))
    }

    fn list(&self, owner: &str) -> Result<Vec<JournalEntry>> {
        self.query_entries("username = ?1", [owner])
    }

    fn update(&self, owner: &str, id: EntryId, new_text: &str) -> Result<JournalEntry> {
        let changed = self.conn.execute(
            "UPDATE journals SET entry = ?1 WHERE rowid = ?2 AND username = ?3",
            (new_text, id, owner),
        )?;
        if changed == 0 {
            return Err(DaybookError::NotFound(id));
        }
        debug!(owner, id, "Updated entry");
        self.get(owner, id)
    }

    fn delete(&self, owner: &str, id: EntryId) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM journals WHERE rowid = ?1 AND username = ?2",
            (id, owner),
        )?;
        if changed == 0 {
            return Err(DaybookError::NotFound(id));
        }
        info!(owner, id, "Deleted entry");
        Ok(())
    }

    fn count(&self, owner: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM journals WHERE username = ?1",
            [owner],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn search(&self, owner: &str, range: &DateRange) -> Result<Vec<JournalEntry>> {
        debug!(owner, start = %range.start(), end = %range.end(), "Searching entries");
        // Filter on the parsed timestamp so search and aggregation agree on
        // which rows are dated
        Ok(self
            .list(owner)?
            .into_iter()
            .filter(|entry| entry.date().is_some_and(|date| range.contains(date)))
            .collect())
    }
}
