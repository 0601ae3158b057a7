//! Word Hive
//!
//! Core of a letter-hive word puzzle: words are checked against local rules
//! and a remote dictionary, and progress through the puzzle unlocks trivia
//! clues and a final challenge.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_hive::core::PuzzleDefinition;
//! use word_hive::dictionary::{DictionaryCache, DictionaryClient, HttpLookup};
//! use word_hive::validator::WordValidator;
//!
//! # async fn demo() {
//! let puzzle = PuzzleDefinition::builder("garden", 'a', &['b', 'c', 'e', 'g', 'l', 'n'])
//!     .total_words(30)
//!     .build()
//!     .unwrap();
//! let client = DictionaryClient::new(HttpLookup::default(), DictionaryCache::new().shared());
//! let validator = WordValidator::new(puzzle, client);
//!
//! let outcome = validator.validate_word("cabbage").await;
//! println!("{:?} at {:.0}%", outcome, validator.progress() * 100.0);
//! # }
//! ```

// Core domain types
pub mod core;

// Remote dictionary access and caching
pub mod dictionary;

// Word validation session
pub mod validator;

// Puzzle progress and unlocks
pub mod progress;

// Telemetry port
pub mod telemetry;

// Persistence port
pub mod storage;

// Runtime configuration
pub mod config;

// Puzzle catalogue
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
