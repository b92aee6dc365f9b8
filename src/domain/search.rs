//! Title search

/// Outcome of a search over entry titles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    /// Set when the query equals a title character-for-character
    pub exact_match: Option<String>,
    /// Titles containing the query, case-insensitively, in input order.
    /// Empty whenever `exact_match` is set.
    pub matches: Vec<String>,
}

/// Search `entries` for `query`.
///
/// An exact (case-sensitive) title match wins outright. Otherwise every title
/// containing the lowercased query is returned; an empty query therefore
/// matches every title.
pub fn search<S: AsRef<str>>(query: &str, entries: &[S]) -> SearchResult {
    let titles: Vec<&str> = entries.iter().map(|t| t.as_ref()).collect();

    if let Some(title) = titles.iter().find(|t| **t == query) {
        return SearchResult {
            exact_match: Some(title.to_string()),
            matches: Vec::new(),
        };
    }

    let needle = query.to_lowercase();
    let matches = titles
        .into_iter()
        .filter(|title| title.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect();

    SearchResult {
        exact_match: None,
        matches,
    }
}
