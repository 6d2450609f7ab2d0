use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::DEFAULT_KEY_PREFIX;

pub const BOARD_DIR: &str = ".teamboard";
pub const CONFIG_FILE: &str = "config.yaml";

/// Per-project configuration, stored as YAML in `.teamboard/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Database file name, relative to `.teamboard/`
    pub storage_file: String,
    /// Namespace prepended to every collection key
    pub key_prefix: String,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Ask before deleting on an interactive terminal
    pub confirm_deletes: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_file: "storage.db".to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            log_filter: "teamboard=warn".to_string(),
            confirm_deletes: true,
        }
    }
}

impl BoardConfig {
    /// Load from `board_dir`, falling back to defaults when no file exists
    pub fn load(board_dir: &Path) -> Result<Self> {
        let path = board_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn save(&self, board_dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(board_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }

    pub fn storage_path(&self, board_dir: &Path) -> PathBuf {
        board_dir.join(&self.storage_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.storage_file, "storage.db");
        assert_eq!(config.key_prefix, "app:");
        assert!(config.confirm_deletes);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = BoardConfig::load(tmp.path()).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "confirm_deletes: false\n").unwrap();

        let config = BoardConfig::load(tmp.path()).unwrap();
        assert!(!config.confirm_deletes);
        assert_eq!(config.key_prefix, "app:");
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let config = BoardConfig {
            storage_file: "board.db".to_string(),
            ..Default::default()
        };
        config.save(tmp.path()).unwrap();

        let loaded = BoardConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.storage_path(tmp.path()), tmp.path().join("board.db"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "confirm_deletes: [nope\n").unwrap();

        assert!(BoardConfig::load(tmp.path()).is_err());
    }
}
