//! Error types for daybook

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daybook
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Unknown user and wrong password are reported identically.
    #[error("Invalid username or password")]
    AuthFailure,

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Entry not found: {0}")]
    NotFound(i64),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Not a daybook directory: {0}")]
    NotDaybookDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaybookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaybookError::NotDaybookDirectory(_) => 2,
            DaybookError::AuthFailure => 3,
            DaybookError::NotFound(_) => 4,
            DaybookError::InvalidRange { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::NotDaybookDirectory(path) => {
                format!(
                    "Not a daybook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' in this directory to create a new journal\n\
                    • Navigate to an existing daybook directory\n\
                    • Set DAYBOOK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DaybookError::AuthFailure => "Invalid username or password\n\n\
                Suggestions:\n\
                • Pass --user and --password (or set DAYBOOK_USER / DAYBOOK_PASSWORD)\n\
                • Create an account first: daybook register <username> --password <pw> --confirm <pw>"
                .to_string(),
            DaybookError::InvalidRange { start, end } => {
                format!(
                    "Start date {} is after end date {}\n\n\
                    Dates use the format YYYY-MM-DD\n\
                    Example: daybook search 2024-01-01 2024-01-31",
                    start, end
                )
            }
            DaybookError::NotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'daybook list' to see the ids of your entries",
                    id
                )
            }
            DaybookError::InvalidInput(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: daybook search 2024-01-01 2024-01-31",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
