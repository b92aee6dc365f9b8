//! Search use case

use crate::domain::search;
use crate::error::Result;
use crate::infrastructure::EntryStore;
use tracing::debug;

/// Where a search request ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPage {
    /// The query named an entry exactly; go straight to it
    Redirect { title: String },
    /// Substring matches (possibly none)
    Results { query: String, matches: Vec<String> },
}

/// Search all stored titles for `query`.
pub fn search_entries<S: EntryStore>(store: &S, query: &str) -> Result<SearchPage> {
    let entries = store.list_entries()?;
    let result = search(query, &entries);
    debug!(query, matches = result.matches.len(), "searched entries");

    Ok(match result.exact_match {
        Some(title) => SearchPage::Redirect { title },
        None => SearchPage::Results {
            query: query.to_string(),
            matches: result.matches,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    fn seeded(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        for title in ["Python", "Pythonic", "Java"] {
            repo.save_entry(title, "text").unwrap();
        }
        repo
    }

    #[test]
    fn test_exact_query_redirects() {
        let temp = TempDir::new().unwrap();
        let repo = seeded(&temp);

        assert_eq!(
            search_entries(&repo, "Python").unwrap(),
            SearchPage::Redirect {
                title: "Python".to_string()
            }
        );
    }

    #[test]
    fn test_partial_query_lists_matches() {
        let temp = TempDir::new().unwrap();
        let repo = seeded(&temp);

        assert_eq!(
            search_entries(&repo, "pyth").unwrap(),
            SearchPage::Results {
                query: "pyth".to_string(),
                matches: vec!["Python".to_string(), "Pythonic".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let temp = TempDir::new().unwrap();
        let repo = seeded(&temp);

        match search_entries(&repo, "").unwrap() {
            SearchPage::Results { matches, .. } => {
                assert_eq!(matches, vec!["Java", "Python", "Pythonic"]);
            }
            other => panic!("Expected Results, got {:?}", other),
        }
    }
}
