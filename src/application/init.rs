//! Initialize workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at `path` and create its database
pub fn init(path: &Path, page_size: usize) -> Result<Workspace> {
    let config = Config::new(page_size)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;
    workspace.save_config(&config)?;
    workspace.open_store(&config)?;

    info!("Initialized workspace at {}", path.display());
    Ok(workspace)
}
