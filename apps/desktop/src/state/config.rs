//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`, `--log-dir`)
//! 2. Environment variables (`BOOKSTORE_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Database location used when nothing overrides it.
pub const DEFAULT_DATABASE_PATH: &str = "./db/bookstore_management.db";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// SQLite file shared by all screens.
    pub database_path: PathBuf,

    /// Directory holding `bookstore.log`.
    pub log_dir: PathBuf,

    /// Title shown on the splash and login screens.
    pub store_name: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Database: `./db/bookstore_management.db`
    /// - Logs: platform data directory, or `./logs` if none is known
    /// - Store: "Bookstore Management"
    fn default() -> Self {
        ConfigState {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            log_dir: default_log_dir(),
            store_name: "Bookstore Management".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTORE_DB_PATH`: Override database path
    /// - `BOOKSTORE_LOG_DIR`: Override log directory
    /// - `BOOKSTORE_STORE_NAME`: Override store name
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(path) = std::env::var("BOOKSTORE_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(dir) = std::env::var("BOOKSTORE_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if let Ok(store_name) = std::env::var("BOOKSTORE_STORE_NAME") {
            if !store_name.trim().is_empty() {
                config.store_name = store_name;
            }
        }

        config
    }

    /// Applies command line overrides.
    pub fn with_overrides(mut self, database_path: Option<PathBuf>, log_dir: Option<PathBuf>) -> Self {
        if let Some(path) = database_path {
            self.database_path = path;
        }
        if let Some(dir) = log_dir {
            self.log_dir = dir;
        }
        self
    }

    /// Flags that reproduce this configuration in a child screen process.
    pub fn forwarded_args(&self) -> Vec<String> {
        vec![
            "--db".to_string(),
            self.database_path.display().to_string(),
            "--log-dir".to_string(),
            self.log_dir.display().to_string(),
        ]
    }
}

/// Determines the log directory based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.bookstore.management/logs`
/// - **Windows**: `%APPDATA%\bookstore\management\data\logs`
/// - **Linux**: `~/.local/share/management/logs`
fn default_log_dir() -> PathBuf {
    ProjectDirs::from("com", "bookstore", "management")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path() {
        let config = ConfigState::default();
        assert_eq!(config.database_path, PathBuf::from("./db/bookstore_management.db"));
        assert!(!config.store_name.is_empty());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = ConfigState::default();
        let log_dir = config.log_dir.clone();

        let config = config.with_overrides(Some(PathBuf::from("/tmp/books.db")), None);
        assert_eq!(config.database_path, PathBuf::from("/tmp/books.db"));
        assert_eq!(config.log_dir, log_dir);
    }

    #[test]
    fn test_forwarded_args() {
        let config = ConfigState::default()
            .with_overrides(Some(PathBuf::from("a.db")), Some(PathBuf::from("logs")));
        assert_eq!(config.forwarded_args(), vec!["--db", "a.db", "--log-dir", "logs"]);
    }
}
