//! Config management use case

use crate::error::{EncycloError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WikiRepository};

/// Service for managing wiki configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "entries_dir" => Ok(config.entries_dir),
            "max_title_length" => Ok(config.max_title_length.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(EncycloError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: entries_dir, max_title_length, created",
                key
            ))),
        }
    }

    /// Set a config value
    ///
    /// Changing `entries_dir` does not move existing entry files.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "entries_dir" => {
                Config::validate_entries_dir(value)?;
                config.entries_dir = value.trim().to_string();
            }
            "max_title_length" => {
                config.max_title_length = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| {
                        EncycloError::Config(format!("Invalid max_title_length: {}", value))
                    })?;
            }
            "created" => {
                return Err(EncycloError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(EncycloError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: entries_dir, max_title_length",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
