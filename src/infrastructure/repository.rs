//! File system entry store

use crate::domain::entry::{title_problem, ENTRY_EXTENSION};
use crate::error::{EncycloError, Result};
use crate::infrastructure::config::{Config, WIKI_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage of named text entries
pub trait EntryStore {
    /// All stored titles, sorted
    fn list_entries(&self) -> Result<Vec<String>>;

    /// Raw content of the entry with exactly this title, if any
    fn get_entry(&self, title: &str) -> Result<Option<String>>;

    /// Create or overwrite the entry for `title`
    fn save_entry(&self, title: &str, content: &str) -> Result<()>;
}

/// Abstract repository for wiki-level operations
pub trait WikiRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .encyclo/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .encyclo/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .encyclo directory exists
    fn is_initialized(&self) -> bool;

    /// Create .encyclo directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation: one `<title>.md` file per entry
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    entries_dir: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository at `root` using the default entries directory
    pub fn new(root: PathBuf) -> Self {
        let entries_dir = root.join(crate::infrastructure::config::DEFAULT_ENTRIES_DIR);
        FileSystemRepository { root, entries_dir }
    }

    /// Create a repository at `root` with entries stored under `entries_dir`
    pub fn with_entries_dir(root: PathBuf, entries_dir: &str) -> Self {
        let entries_dir = root.join(entries_dir);
        FileSystemRepository { root, entries_dir }
    }

    /// Open the repository at `root`, reading the entries directory from its config
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(Self::with_entries_dir(root, &config.entries_dir))
    }

    /// Discover the wiki root, then open it.
    /// First checks ENCYCLO_ROOT environment variable, then walks up from the
    /// current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ENCYCLO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_wiki_dir(&path) {
                return Self::open(path);
            } else {
                return Err(EncycloError::Config(format!(
                    "ENCYCLO_ROOT is set to '{}' but no .encyclo directory found. \
                    Run 'encyclo init' in that directory or unset ENCYCLO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the wiki root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_wiki_dir(&current) {
                debug!(root = %current.display(), "found wiki root");
                return Self::open(current);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(EncycloError::NotWikiDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Directory holding the entry files
    pub fn entries_dir(&self) -> &Path {
        &self.entries_dir
    }

    fn has_wiki_dir(path: &Path) -> bool {
        path.join(WIKI_DIR).is_dir()
    }

    fn entry_path(&self, title: &str) -> PathBuf {
        self.entries_dir.join(format!("{}{}", title, ENTRY_EXTENSION))
    }

    fn title_from_file_name(name: &str) -> Option<&str> {
        let title = name.strip_suffix(ENTRY_EXTENSION)?;
        if title_problem(title).is_some() {
            return None;
        }
        Some(title)
    }
}

impl WikiRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_wiki_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let wiki_dir = self.root.join(WIKI_DIR);

        if wiki_dir.exists() {
            return Err(EncycloError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&wiki_dir)?;
        fs::create_dir_all(&self.entries_dir)?;
        Ok(())
    }
}

impl EntryStore for FileSystemRepository {
    fn list_entries(&self) -> Result<Vec<String>> {
        if !self.entries_dir.exists() {
            return Ok(Vec::new());
        }

        let mut titles = Vec::new();
        for entry in fs::read_dir(&self.entries_dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(title) = Self::title_from_file_name(name) {
                titles.push(title.to_string());
            }
        }

        titles.sort();
        debug!(count = titles.len(), "listed entries");
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        if title_problem(title).is_some() {
            return Ok(None);
        }

        match fs::read_to_string(self.entry_path(title)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EncycloError::Io(e)),
        }
    }

    fn save_entry(&self, title: &str, content: &str) -> Result<()> {
        if let Some(problem) = title_problem(title) {
            return Err(EncycloError::InvalidTitle(format!("'{}': {}", title, problem)));
        }

        if !self.entries_dir.exists() {
            fs::create_dir_all(&self.entries_dir)?;
        }

        fs::write(self.entry_path(title), content)?;
        info!(title, bytes = content.len(), "saved entry");
        Ok(())
    }
}
