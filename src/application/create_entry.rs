//! Create entry use case

use crate::domain::entry::titles_collide;
use crate::domain::form::validate_new_entry;
use crate::domain::{Flash, FormErrors, NewEntryForm};
use crate::error::Result;
use crate::infrastructure::EntryStore;
use tracing::{info, warn};

pub const CONFLICT_MESSAGE: &str = "An entry with this title already exists.";

/// Result of one create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Blank form shown on first visit
    FormDisplayed { form: NewEntryForm },
    /// Submitted values failed validation; redisplay with field errors
    ValidationFailed {
        form: NewEntryForm,
        errors: FormErrors,
    },
    /// An entry with the title already exists; nothing was saved
    TitleConflict { form: NewEntryForm, flash: Flash },
    /// Entry saved; go to its page
    Saved { title: String },
}

/// Service handling the "new entry" form
pub struct CreateEntryService<'a, S: EntryStore> {
    store: &'a S,
    max_title_length: usize,
}

impl<'a, S: EntryStore> CreateEntryService<'a, S> {
    pub fn new(store: &'a S, max_title_length: usize) -> Self {
        CreateEntryService {
            store,
            max_title_length,
        }
    }

    /// Show the empty form
    pub fn display(&self) -> CreateOutcome {
        CreateOutcome::FormDisplayed {
            form: NewEntryForm::default(),
        }
    }

    /// Handle a submitted form
    pub fn submit(&self, form: NewEntryForm) -> Result<CreateOutcome> {
        let form = form.cleaned();

        // 1. Validate fields
        if let Err(errors) = validate_new_entry(&form, self.max_title_length) {
            return Ok(CreateOutcome::ValidationFailed { form, errors });
        }

        // 2. Refuse to overwrite an existing entry
        if self.title_taken(&form.title)? {
            warn!(title = %form.title, "create refused, title exists");
            return Ok(CreateOutcome::TitleConflict {
                form,
                flash: Flash::error(CONFLICT_MESSAGE),
            });
        }

        // 3. Persist
        self.store.save_entry(&form.title, &form.content)?;
        info!(title = %form.title, "created entry");
        Ok(CreateOutcome::Saved { title: form.title })
    }

    fn title_taken(&self, title: &str) -> Result<bool> {
        if self.store.get_entry(title)?.is_some() {
            return Ok(true);
        }
        Ok(self
            .store
            .list_entries()?
            .iter()
            .any(|existing| titles_collide(existing, title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    fn repo(temp: &TempDir) -> FileSystemRepository {
        FileSystemRepository::new(temp.path().to_path_buf())
    }

    #[test]
    fn test_display_shows_blank_form() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let service = CreateEntryService::new(&repo, 100);

        assert_eq!(
            service.display(),
            CreateOutcome::FormDisplayed {
                form: NewEntryForm::default()
            }
        );
    }

    #[test]
    fn test_submit_saves_new_entry() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service
            .submit(NewEntryForm::new("Rust", "# Rust"))
            .unwrap();

        assert_eq!(
            outcome,
            CreateOutcome::Saved {
                title: "Rust".to_string()
            }
        );
        assert_eq!(repo.get_entry("Rust").unwrap().as_deref(), Some("# Rust"));
    }

    #[test]
    fn test_submit_conflict_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        repo.save_entry("Python", "original").unwrap();
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service
            .submit(NewEntryForm::new("Python", "replacement"))
            .unwrap();

        match outcome {
            CreateOutcome::TitleConflict { form, flash } => {
                assert_eq!(form.content, "replacement");
                assert_eq!(flash, Flash::error(CONFLICT_MESSAGE));
            }
            other => panic!("Expected TitleConflict, got {:?}", other),
        }
        assert_eq!(repo.get_entry("Python").unwrap().as_deref(), Some("original"));
    }

    #[test]
    fn test_submit_conflict_ignores_case() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        repo.save_entry("Python", "original").unwrap();
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service.submit(NewEntryForm::new("python", "lower")).unwrap();

        assert!(matches!(outcome, CreateOutcome::TitleConflict { .. }));
        assert_eq!(repo.list_entries().unwrap(), vec!["Python"]);
    }

    #[test]
    fn test_submit_padded_title_conflicts() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        repo.save_entry("Python", "original").unwrap();
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service
            .submit(NewEntryForm::new(" Python ", "dup"))
            .unwrap();

        assert!(matches!(outcome, CreateOutcome::TitleConflict { .. }));
        assert_eq!(repo.list_entries().unwrap(), vec!["Python"]);
    }

    #[test]
    fn test_submit_saves_trimmed_values() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service
            .submit(NewEntryForm::new("  Rust ", "\n# Rust\n"))
            .unwrap();

        assert_eq!(
            outcome,
            CreateOutcome::Saved {
                title: "Rust".to_string()
            }
        );
        assert_eq!(repo.get_entry("Rust").unwrap().as_deref(), Some("# Rust"));
    }

    #[test]
    fn test_submit_multibyte_title_over_file_name_limit() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let service = CreateEntryService::new(&repo, 100);

        let outcome = service
            .submit(NewEntryForm::new("€".repeat(90), "content"))
            .unwrap();

        match outcome {
            CreateOutcome::ValidationFailed { errors, .. } => {
                assert!(!errors.field("title").is_empty());
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
        assert!(repo.list_entries().unwrap().is_empty());
    }

    #[test]
    fn test_submit_invalid_form() {
        let temp = TempDir::new().unwrap();
        let repo = repo(&temp);
        let service = CreateEntryService::new(&repo, 10);

        let outcome = service
            .submit(NewEntryForm::new("A very long title", ""))
            .unwrap();

        match outcome {
            CreateOutcome::ValidationFailed { errors, .. } => {
                assert!(!errors.field("title").is_empty());
                assert!(!errors.field("content").is_empty());
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
        assert!(repo.list_entries().unwrap().is_empty());
    }
}
