//! Puzzle catalogue loading
//!
//! Catalogues are TOML or JSON documents holding a `puzzle` array; every
//! entry goes through the validating [`PuzzleDefinition`] constructor.

use crate::core::PuzzleDefinition;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error type for catalogue loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid puzzle TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalogue contains no puzzles")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct Catalogue {
    #[serde(default)]
    puzzle: Vec<PuzzleDefinition>,
}

fn non_empty(catalogue: Catalogue) -> Result<Vec<PuzzleDefinition>, LoadError> {
    if catalogue.puzzle.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(catalogue.puzzle)
}

/// Parse a TOML catalogue
///
/// # Errors
///
/// Returns `LoadError` if the text is not a valid catalogue or holds no puzzles.
pub fn from_toml(content: &str) -> Result<Vec<PuzzleDefinition>, LoadError> {
    non_empty(toml::from_str(content)?)
}

/// Parse a JSON catalogue
///
/// # Errors
///
/// Returns `LoadError` if the text is not a valid catalogue or holds no puzzles.
pub fn from_json(content: &str) -> Result<Vec<PuzzleDefinition>, LoadError> {
    non_empty(serde_json::from_str(content)?)
}

/// Load a catalogue from disk, choosing the format by extension
///
/// `.json` files are read as JSON; anything else as TOML.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or parsed.
///
/// # Examples
/// ```no_run
/// use word_hive::puzzles::loader::load_from_file;
///
/// let puzzles = load_from_file("data/puzzles.toml").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzleDefinition>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json(&content)
    } else {
        from_toml(&content)
    }
}
