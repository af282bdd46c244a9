//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};

/// Service for reading and changing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        self.workspace.load_config()?.get(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;
        config.set(key, value)?;
        self.workspace.save_config(&config)
    }

    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
