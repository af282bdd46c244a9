//! Configuration management

use crate::domain::DEFAULT_PAGE_SIZE;
use crate::error::{DaybookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};

/// Name of the per-workspace state directory
pub const STATE_DIR: &str = ".daybook";

const DEFAULT_DATABASE: &str = "daybook.db";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_database")]
    pub database: String,
    pub created: DateTime<Utc>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new(page_size: usize) -> Result<Self> {
        let config = Config {
            page_size,
            database: default_database(),
            created: Utc::now(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DaybookError::InvalidInput(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(DaybookError::Config(
                "database file name cannot be empty".to_string(),
            ));
        }
        // Must stay inside the state directory
        let mut components = Path::new(&self.database).components();
        let bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(name)), None) if name == self.database.as_str()
        );
        if !bare {
            return Err(DaybookError::Config(format!(
                "database must be a plain file name inside {}: '{}'",
                STATE_DIR, self.database
            )));
        }
        Ok(())
    }

    /// Load config from .daybook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STATE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::NotDaybookDirectory(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DaybookError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .daybook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Read a single value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "page_size" => Ok(self.page_size.to_string()),
            "database" => Ok(self.database.clone()),
            "created" => Ok(self.created.to_rfc3339()),
            _ => Err(DaybookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: page_size, database, created",
                key
            ))),
        }
    }

    /// Set a single value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "page_size" => {
                next.page_size = value.parse().map_err(|_| {
                    DaybookError::InvalidInput(format!("page_size must be a number: {}", value))
                })?;
            }
            "database" => {
                next.database = value.to_string();
            }
            "created" => {
                return Err(DaybookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: page_size, database",
                    key
                )));
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(3).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.database, "daybook.db");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(matches!(
            Config::new(0),
            Err(DaybookError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(5).unwrap();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".daybook").exists());
        assert!(temp.path().join(".daybook/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 5);
        assert_eq!(loaded.database, config.database);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());
        match result.unwrap_err() {
            DaybookError::NotDaybookDirectory(_) => {}
            other => panic!("Expected NotDaybookDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();
        fs::write(
            temp.path().join(".daybook/config.toml"),
            "created = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(loaded.database, "daybook.db");
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::new(3).unwrap();
        config.set("page_size", "10").unwrap();
        assert_eq!(config.get("page_size").unwrap(), "10");

        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("page_size", "ten").is_err());
        assert!(config.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(config.get("editor").is_err());
    }

    #[test]
    fn test_database_must_be_plain_file_name() {
        let mut config = Config::new(3).unwrap();
        for bad in ["../../x.db", "sub/x.db", "/tmp/x.db", "..", ".", "./x.db"] {
            assert!(
                matches!(config.set("database", bad), Err(DaybookError::Config(_))),
                "accepted {}",
                bad
            );
        }
        assert_eq!(config.get("database").unwrap(), "daybook.db");
        config.set("database", "journal.sqlite").unwrap();
        assert_eq!(config.get("database").unwrap(), "journal.sqlite");
    }

    #[test]
    fn test_load_rejects_escaping_database() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".daybook")).unwrap();
        fs::write(
            temp.path().join(".daybook/config.toml"),
            "database = \"../outside.db\"\ncreated = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(DaybookError::Config(_))
        ));
    }
}
