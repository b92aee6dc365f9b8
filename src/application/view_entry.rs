//! Single entry view use case

use crate::domain::render;
use crate::error::Result;
use crate::infrastructure::EntryStore;
use tracing::debug;

pub const NOT_FOUND_MESSAGE: &str = "The requested page was not found.";

/// What the entry page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPage {
    Found { title: String, html: String },
    NotFound { title: String, message: String },
}

impl ViewPage {
    pub(crate) fn not_found(title: &str) -> Self {
        ViewPage::NotFound {
            title: title.to_string(),
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Look up `title` (exact match) and render it.
pub fn view_entry<S: EntryStore>(store: &S, title: &str) -> Result<ViewPage> {
    match store.get_entry(title)? {
        Some(content) => Ok(ViewPage::Found {
            title: title.to_string(),
            html: render(&content),
        }),
        None => {
            debug!(title, "entry not found");
            Ok(ViewPage::not_found(title))
        }
    }
}
