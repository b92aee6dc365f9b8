//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{EntryStore, FileSystemRepository, WikiRepository};
