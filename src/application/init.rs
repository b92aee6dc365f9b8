//! Initialize wiki use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, WikiRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new wiki at the specified path.
pub fn init(path: &Path, entries_dir: &str) -> Result<FileSystemRepository> {
    Config::validate_entries_dir(entries_dir)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::with_entries_dir(path.to_path_buf(), entries_dir);

    // Creates .encyclo and the entries directory
    repo.initialize()?;

    let config = Config::new(entries_dir);
    repo.save_config(&config)?;

    info!(root = %path.display(), entries_dir, "initialized wiki");
    Ok(repo)
}
