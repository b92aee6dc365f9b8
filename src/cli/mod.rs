//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ContentSource};
pub use output::{
    format_entry_list, format_entry_page, format_flash, format_form_errors, format_search_results,
};
