//! encyclo - A small Markdown encyclopedia
//!
//! Entries are plain Markdown files keyed by title. The crate provides the
//! entry store, title search, Markdown rendering and the request handlers
//! (index, view, search, create, edit, random) that tie them together.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::EncycloError;
