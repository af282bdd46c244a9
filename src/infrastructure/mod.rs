//! Infrastructure layer - Persistence, hashing, and configuration

pub mod config;
pub mod password;
pub mod sqlite;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use password::CredentialHasher;
pub use sqlite::SqliteStore;
pub use store::{CredentialStore, JournalStore};
pub use workspace::Workspace;
