//! Puzzle catalogue
//!
//! The puzzle data provider: an embedded catalogue plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::PUZZLES_TOML;
pub use loader::{LoadError, load_from_file};

use crate::core::PuzzleDefinition;

/// Parse the built-in catalogue
///
/// # Errors
///
/// Returns `LoadError` if the embedded data is malformed.
pub fn embedded() -> Result<Vec<PuzzleDefinition>, LoadError> {
    loader::from_toml(PUZZLES_TOML)
}

/// Find a puzzle by id
#[must_use]
pub fn find<'a>(puzzles: &'a [PuzzleDefinition], id: &str) -> Option<&'a PuzzleDefinition> {
    puzzles.iter().find(|p| p.id() == id)
}
