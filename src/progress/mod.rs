//! Puzzle progress tracking

mod tracker;

pub use tracker::{ProgressEvent, ProgressThresholds, ProgressTracker, unlocked_clue_count};
