//! Form validation for creating and editing entries
//!
//! Forms are plain values; validation is a function returning the field
//! errors found, so nothing carries state between requests.

use crate::domain::entry::title_problem;
use std::collections::BTreeMap;
use std::fmt;

/// Submitted values of the "new entry" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntryForm {
    pub title: String,
    pub content: String,
}

impl NewEntryForm {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NewEntryForm {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Strip surrounding whitespace from both fields
    pub fn cleaned(self) -> Self {
        NewEntryForm {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

/// Submitted values of the "edit entry" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditEntryForm {
    pub content: String,
}

impl EditEntryForm {
    pub fn new(content: impl Into<String>) -> Self {
        EditEntryForm {
            content: content.into(),
        }
    }

    /// Strip surrounding whitespace from the content
    pub fn cleaned(self) -> Self {
        EditEntryForm {
            content: self.content.trim().to_string(),
        }
    }
}

/// Field name → error messages for that field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages recorded for `field`, empty if the field is valid
    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.fields.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn check_content(content: &str, errors: &mut FormErrors) {
    if content.trim().is_empty() {
        errors.add("content", "This field is required.");
    }
}

/// Validate a new-entry submission
pub fn validate_new_entry(
    form: &NewEntryForm,
    max_title_length: usize,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    let length = form.title.chars().count();
    if form.title.trim().is_empty() {
        errors.add("title", "This field is required.");
    } else if length > max_title_length {
        errors.add(
            "title",
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max_title_length, length
            ),
        );
    } else if let Some(problem) = title_problem(&form.title) {
        errors.add("title", format!("Invalid title: {}.", problem));
    }

    check_content(&form.content, &mut errors);
    errors.into_result()
}

/// Validate an edit submission
pub fn validate_edit_entry(form: &EditEntryForm) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    check_content(&form.content, &mut errors);
    errors.into_result()
}
