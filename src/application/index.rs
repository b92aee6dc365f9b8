//! Index listing use case

use crate::error::Result;
use crate::infrastructure::EntryStore;

/// List every entry title for the index page.
pub fn list_entries<S: EntryStore>(store: &S) -> Result<Vec<String>> {
    store.list_entries()
}
