//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Personal journal with date search and entry statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Username to act as
    #[arg(short, long, global = true, env = "DAYBOOK_USER")]
    pub user: Option<String>,

    /// Password for --user
    #[arg(short, long, global = true, env = "DAYBOOK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Entries shown per page
        #[arg(long, default_value_t = crate::domain::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },

    /// Create an account
    Register {
        username: String,

        /// Repeat the password
        #[arg(long)]
        confirm: String,
    },

    /// Write a new entry
    Add {
        /// Entry text (may be empty)
        text: String,

        /// Reference to an already stored attachment
        #[arg(long, value_name = "REF")]
        attach: Option<String>,
    },

    /// Show one page of entries
    List {
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Replace the text of an entry
    Edit { id: i64, text: String },

    /// Permanently remove an entry
    Delete { id: i64 },

    /// Find entries created between two dates (YYYY-MM-DD, inclusive)
    Search { start: String, end: String },

    /// Print the number of entries
    Count,

    /// Entry counts per week, month, or year
    Stats {
        /// Bucket size (week, month, year)
        #[arg(long, default_value = "month")]
        by: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
