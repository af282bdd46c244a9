//! Application layer - Use cases and orchestration

pub mod auth;
pub mod entries;
pub mod init;
pub mod manage_config;
pub mod search;
pub mod stats;

pub use auth::AuthService;
pub use entries::{EntryService, Page};
pub use manage_config::ConfigService;
pub use search::search_entries;
pub use stats::{summarize, Granularity, Summary};
