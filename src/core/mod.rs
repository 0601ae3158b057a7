//! Core domain types for the letter hive
//!
//! Pure types with no I/O: word normalization, puzzle definitions and the
//! outcome vocabulary shared by the validator and its callers.

mod outcome;
mod puzzle;
mod word;

pub use outcome::{RejectReason, RemoteErrorKind, ValidationOutcome, ValidatorPhase};
pub use puzzle::{FinalChallenge, PuzzleBuilder, PuzzleDefinition, PuzzleError, TriviaClue};
pub use word::{Word, normalize};
