//! Workspace discovery and layout

use crate::error::{DaybookError, Result};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::{Config, SqliteStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A directory holding a `.daybook` state directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Locate the workspace. `DAYBOOK_ROOT` wins; otherwise walk up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(DaybookError::Config(format!(
                    "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                    Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first directory containing `.daybook`
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                debug!("Using workspace at {}", current.display());
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DaybookError::NotDaybookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    /// Create the `.daybook` directory; fails if it already exists
    pub fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(STATE_DIR))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn database_path(&self, config: &Config) -> PathBuf {
        self.root.join(STATE_DIR).join(&config.database)
    }

    pub fn open_store(&self, config: &Config) -> Result<SqliteStore> {
        SqliteStore::open(&self.database_path(config))
    }
}
