//! Edit entry use case

use crate::domain::form::validate_edit_entry;
use crate::domain::{EditEntryForm, Flash, FormErrors};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use tracing::{debug, info};

pub const SAVED_MESSAGE: &str = "Your changes have been saved.";

/// Result of one edit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// No entry with this exact title; nothing else happens
    NotFound { title: String, message: String },
    /// Form pre-filled with the current content
    FormDisplayed { title: String, form: EditEntryForm },
    /// Submitted content failed validation
    ValidationFailed {
        title: String,
        form: EditEntryForm,
        errors: FormErrors,
    },
    /// Content overwritten; go to the entry page
    Saved { title: String, flash: Flash },
}

/// Service handling the "edit entry" form.
///
/// Saves overwrite unconditionally; concurrent editors of one title race and
/// the last write wins.
pub struct EditEntryService<'a, S: EntryStore> {
    store: &'a S,
}

impl<'a, S: EntryStore> EditEntryService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        EditEntryService { store }
    }

    /// Show the form for an existing entry
    pub fn display(&self, title: &str) -> Result<EditOutcome> {
        Ok(match self.store.get_entry(title)? {
            Some(content) => EditOutcome::FormDisplayed {
                title: title.to_string(),
                form: EditEntryForm::new(content),
            },
            None => Self::not_found(title),
        })
    }

    /// Handle submitted content for an existing entry
    pub fn submit(&self, title: &str, form: EditEntryForm) -> Result<EditOutcome> {
        if self.store.get_entry(title)?.is_none() {
            return Ok(Self::not_found(title));
        }

        let form = form.cleaned();
        if let Err(errors) = validate_edit_entry(&form) {
            return Ok(EditOutcome::ValidationFailed {
                title: title.to_string(),
                form,
                errors,
            });
        }

        self.store.save_entry(title, &form.content)?;
        info!(title, "updated entry");
        Ok(EditOutcome::Saved {
            title: title.to_string(),
            flash: Flash::success(SAVED_MESSAGE),
        })
    }

    fn not_found(title: &str) -> EditOutcome {
        debug!(title, "edit target not found");
        EditOutcome::NotFound {
            title: title.to_string(),
            message: super::view_entry::NOT_FOUND_MESSAGE.to_string(),
        }
    }
}
