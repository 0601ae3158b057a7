//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckReport, check_progress_bar, run_check};
pub use play::{PlayCommand, parse_command, play_lines, run_play};

use thiserror::Error;

/// Error type for interactive commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
