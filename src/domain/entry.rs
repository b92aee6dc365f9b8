//! Title rules for stored entries

/// File extension of stored entries
pub const ENTRY_EXTENSION: &str = ".md";

/// Longest file name, in bytes, common filesystems accept
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Check whether a title can be used as a single file name.
///
/// Returns a description of the problem when it cannot.
pub fn title_problem(title: &str) -> Option<&'static str> {
    if title.trim().is_empty() {
        return Some("title must not be empty");
    }
    if title.starts_with('.') {
        return Some("title must not start with '.'");
    }
    if title.contains('/') || title.contains('\\') {
        return Some("title must not contain '/' or '\\'");
    }
    if title.chars().any(char::is_control) {
        return Some("title must not contain control characters");
    }
    if title.len() + ENTRY_EXTENSION.len() > MAX_FILE_NAME_BYTES {
        return Some("title is too long to store as a file name");
    }
    None
}

/// Case-insensitive title comparison used for existence checks
pub fn titles_collide(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_titles_are_storable() {
        assert_eq!(title_problem("Python"), None);
        assert_eq!(title_problem("C++ (language)"), None);
        assert_eq!(title_problem("Café"), None);
    }

    #[test]
    fn test_unstorable_titles() {
        assert!(title_problem("").is_some());
        assert!(title_problem("   ").is_some());
        assert!(title_problem(".hidden").is_some());
        assert!(title_problem("..").is_some());
        assert!(title_problem("a/b").is_some());
        assert!(title_problem("a\\b").is_some());
        assert!(title_problem("line\nbreak").is_some());
    }

    #[test]
    fn test_title_byte_length_limit() {
        // 84 three-byte characters plus ".md" is exactly 255 bytes
        assert_eq!(title_problem(&"€".repeat(84)), None);
        assert!(title_problem(&"€".repeat(85)).is_some());
        assert!(title_problem(&"a".repeat(300)).is_some());
    }

    #[test]
    fn test_titles_collide_ignores_case() {
        assert!(titles_collide("Python", "python"));
        assert!(titles_collide("HTML", "html"));
        assert!(!titles_collide("Python", "Pythonic"));
    }
}
