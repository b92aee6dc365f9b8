//! Application layer - Request handlers and use cases
//!
//! Handlers return plain values describing what to show next (a page, a
//! redirect, a flash message); rendering those is the caller's job.

pub mod create_entry;
pub mod edit_entry;
pub mod index;
pub mod init;
pub mod manage_config;
pub mod random_entry;
pub mod search_entries;
pub mod view_entry;

pub use create_entry::{CreateEntryService, CreateOutcome};
pub use edit_entry::{EditEntryService, EditOutcome};
pub use index::list_entries;
pub use random_entry::random_entry;
pub use search_entries::{search_entries, SearchPage};
pub use view_entry::{view_entry, ViewPage};
