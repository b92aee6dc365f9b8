//! Configuration management

use crate::error::{EncycloError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the marker directory holding wiki metadata
pub const WIKI_DIR: &str = ".encyclo";

pub const DEFAULT_ENTRIES_DIR: &str = "entries";
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory (relative to the wiki root) holding `<title>.md` files
    #[serde(default = "default_entries_dir")]
    pub entries_dir: String,
    /// Upper bound on title length, in characters
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    pub created: DateTime<Utc>,
}

fn default_entries_dir() -> String {
    DEFAULT_ENTRIES_DIR.to_string()
}

fn default_max_title_length() -> usize {
    DEFAULT_MAX_TITLE_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries_dir: default_entries_dir(),
            max_title_length: default_max_title_length(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Create a new config with the given entries directory
    pub fn new(entries_dir: &str) -> Self {
        Config {
            entries_dir: entries_dir.to_string(),
            ..Config::default()
        }
    }

    /// Load config from .encyclo/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(WIKI_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EncycloError::NotWikiDirectory(path.to_path_buf())
            } else {
                EncycloError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .encyclo/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let wiki_dir = path.join(WIKI_DIR);
        let config_path = wiki_dir.join("config.toml");

        if !wiki_dir.exists() {
            fs::create_dir(&wiki_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject values that would make the store unusable
    pub fn validate(&self) -> Result<()> {
        Self::validate_entries_dir(&self.entries_dir)?;
        if self.max_title_length == 0 {
            return Err(EncycloError::Config(
                "Invalid max_title_length: must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Entries must live inside the wiki root, in a plain relative directory
    pub fn validate_entries_dir(dir: &str) -> Result<()> {
        let trimmed = dir.trim();
        let escapes_root = Path::new(trimmed)
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)));

        if trimmed.is_empty() || escapes_root || trimmed.starts_with(WIKI_DIR) {
            return Err(EncycloError::Config(format!(
                "Invalid entries_dir: '{}'. Use a relative directory inside the wiki root",
                dir
            )));
        }
        Ok(())
    }
}
