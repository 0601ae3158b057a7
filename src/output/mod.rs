//! Terminal output formatting
//!
//! Display utilities for the game loop and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_check_report, print_clues, print_final_result, print_hive,
    print_outcome, print_progress, print_puzzle_list, print_stats, print_words,
};
