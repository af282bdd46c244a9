//! daybook - Personal journal
//!
//! Authenticated users keep dated text entries in a local SQLite workspace,
//! search them by date, page through them, and view entry counts per week,
//! month, and year.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
