//! Embedded puzzle catalogue
//!
//! Puzzle data compiled into the binary from `data/puzzles.toml`.

/// TOML source of the built-in catalogue
pub const PUZZLES_TOML: &str = include_str!("../../data/puzzles.toml");
