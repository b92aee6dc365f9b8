//! Error types for encyclo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for encyclo application
#[derive(Debug, Error)]
pub enum EncycloError {
    #[error("Not an encyclo directory: {0}")]
    NotWikiDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("An entry with this title already exists: {0}")]
    TitleConflict(String),

    #[error("Invalid input: {0}")]
    InvalidForm(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("No entries available")]
    NoEntries,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EncycloError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EncycloError::NotWikiDirectory(_) => 2,
            EncycloError::EntryNotFound(_) => 4,
            EncycloError::TitleConflict(_) => 5,
            EncycloError::InvalidForm(_) | EncycloError::InvalidTitle(_) => 6,
            EncycloError::NoEntries => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EncycloError::NotWikiDirectory(path) => {
                format!(
                    "Not an encyclo directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'encyclo init' in this directory to create a new wiki\n\
                    • Navigate to an existing encyclo directory\n\
                    • Set ENCYCLO_ROOT environment variable to your wiki path",
                    path.display()
                )
            }
            EncycloError::EntryNotFound(title) => {
                format!(
                    "The requested page was not found: '{}'\n\n\
                    Suggestions:\n\
                    • Titles are case-sensitive; use 'encyclo search {}' to find similar entries\n\
                    • Use 'encyclo list' to see all entries\n\
                    • Create it with: encyclo new \"{}\"",
                    title, title, title
                )
            }
            EncycloError::TitleConflict(title) => {
                format!(
                    "An entry with this title already exists: '{}'\n\n\
                    Suggestions:\n\
                    • Edit the existing entry: encyclo edit \"{}\"\n\
                    • Choose a different title",
                    title, title
                )
            }
            EncycloError::NoEntries => "No entries available\n\n\
                Suggestions:\n\
                • Create the first entry: encyclo new <TITLE>"
                .to_string(),
            EncycloError::Config(msg) => {
                if msg.contains("max_title_length") {
                    format!(
                        "{}\n\n\
                        Expected a positive whole number\n\
                        Example: encyclo config max_title_length 120",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EncycloError
pub type Result<T> = std::result::Result<T, EncycloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_wiki_directory_suggestion() {
        let err = EncycloError::NotWikiDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("encyclo init"));
        assert!(msg.contains("ENCYCLO_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = EncycloError::EntryNotFound("Rust".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("not found"));
        assert!(msg.contains("encyclo search Rust"));
        assert!(msg.contains("encyclo new \"Rust\""));
    }

    #[test]
    fn test_title_conflict_suggestions() {
        let err = EncycloError::TitleConflict("Python".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("already exists"));
        assert!(msg.contains("encyclo edit \"Python\""));
    }

    #[test]
    fn test_config_max_title_length_suggestions() {
        let err = EncycloError::Config("Invalid max_title_length: abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("positive whole number"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(EncycloError::NotWikiDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(EncycloError::EntryNotFound("x".into()).exit_code(), 4);
        assert_eq!(EncycloError::TitleConflict("x".into()).exit_code(), 5);
        assert_eq!(EncycloError::InvalidForm("x".into()).exit_code(), 6);
        assert_eq!(EncycloError::NoEntries.exit_code(), 7);
        assert_eq!(EncycloError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = EncycloError::InvalidTitle("a/b".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid title: a/b");
    }
}
