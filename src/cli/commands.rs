//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "encyclo")]
#[command(about = "A small Markdown encyclopedia kept in plain files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where submitted entry content comes from; stdin when neither is given
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ContentSource {
    /// Entry content as Markdown text
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read entry content from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new wiki
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Directory, relative to the wiki root, holding entry files
        #[arg(long, default_value = "entries")]
        entries_dir: String,
    },

    /// List all entries
    List,

    /// Show an entry rendered as HTML
    Show {
        /// Entry title (case-sensitive)
        title: String,

        /// Print the stored Markdown instead of HTML
        #[arg(long)]
        raw: bool,
    },

    /// Search entry titles
    Search {
        /// Text to look for; an exact title opens that entry
        #[arg(default_value = "")]
        query: String,
    },

    /// Create a new entry
    New {
        /// Title of the new entry
        title: String,

        #[command(flatten)]
        source: ContentSource,
    },

    /// Replace the content of an existing entry
    Edit {
        /// Entry title (case-sensitive)
        title: String,

        #[command(flatten)]
        source: ContentSource,
    },

    /// Show a randomly chosen entry
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
