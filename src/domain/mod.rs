//! Domain layer - Entries, search, rendering and form rules

pub mod entry;
pub mod flash;
pub mod form;
pub mod markup;
pub mod search;

pub use flash::{Flash, FlashLevel};
pub use form::{EditEntryForm, FormErrors, NewEntryForm};
pub use markup::render;
pub use search::{search, SearchResult};
