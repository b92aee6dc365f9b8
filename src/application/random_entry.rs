//! Random entry use case

use crate::error::{EncycloError, Result};
use crate::infrastructure::EntryStore;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Pick one stored title uniformly at random.
///
/// The generator is supplied by the caller; seed it for reproducible picks.
pub fn random_entry<S, R>(store: &S, rng: &mut R) -> Result<String>
where
    S: EntryStore,
    R: Rng + ?Sized,
{
    let entries = store.list_entries()?;
    let title = entries.choose(rng).cloned().ok_or(EncycloError::NoEntries)?;
    debug!(title = %title, of = entries.len(), "picked random entry");
    Ok(title)
}
