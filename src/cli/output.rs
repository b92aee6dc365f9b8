//! Output formatting utilities

use crate::domain::{Flash, FlashLevel, FormErrors};

/// Format the index listing
pub fn format_entry_list(titles: &[String]) -> String {
    if titles.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for title in titles {
        output.push_str(&format!("{}\n", title));
    }
    output
}

/// Format search matches
pub fn format_search_results(query: &str, matches: &[String]) -> String {
    if matches.is_empty() {
        return format!("No entries match '{}'", query);
    }

    let mut output = format!("Entries matching '{}':\n", query);
    for title in matches {
        output.push_str(&format!("  {}\n", title));
    }
    output
}

/// Format a rendered entry page
pub fn format_entry_page(title: &str, html: &str) -> String {
    format!("# {}\n\n{}", title, html)
}

/// Format a flash banner
pub fn format_flash(flash: &Flash) -> String {
    match flash.level {
        FlashLevel::Success => format!("✓ {}", flash.message),
        FlashLevel::Error => format!("✗ {}", flash.message),
    }
}

/// Format field-level form errors, one line per message
pub fn format_form_errors(errors: &FormErrors) -> String {
    let mut output = String::new();
    for (field, messages) in errors.iter() {
        for message in messages {
            output.push_str(&format!("{}: {}\n", field, message));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let titles = vec!["CSS".to_string(), "Git".to_string()];
        assert_eq!(format_entry_list(&titles), "CSS\nGit\n");
    }

    #[test]
    fn test_format_search_results() {
        let matches = vec!["Python".to_string(), "Pythonic".to_string()];
        let output = format_search_results("pyth", &matches);
        assert!(output.starts_with("Entries matching 'pyth':"));
        assert!(output.contains("  Python\n"));
        assert!(output.contains("  Pythonic\n"));
    }

    #[test]
    fn test_format_no_search_results() {
        assert_eq!(format_search_results("zzz", &[]), "No entries match 'zzz'");
    }

    #[test]
    fn test_format_entry_page() {
        let output = format_entry_page("Git", "<h1>Git</h1>\n");
        assert_eq!(output, "# Git\n\n<h1>Git</h1>\n");
    }

    #[test]
    fn test_format_flash() {
        assert_eq!(format_flash(&Flash::success("Saved.")), "✓ Saved.");
        assert_eq!(format_flash(&Flash::error("Nope.")), "✗ Nope.");
    }

    #[test]
    fn test_format_form_errors() {
        let mut errors = FormErrors::default();
        errors.add("title", "This field is required.");
        assert_eq!(format_form_errors(&errors), "title: This field is required.\n");
    }
}
