//! Local validation rules
//!
//! Checked in order before any dictionary traffic; the first failure wins.

use super::accepted::AcceptedWords;
use crate::core::{PuzzleDefinition, RejectReason, Word};

/// Default minimum word length
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Tunable local rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_length: usize,
    /// Reject words using letters outside the hive
    pub restrict_to_puzzle_letters: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            restrict_to_puzzle_letters: false,
        }
    }
}

impl ValidationRules {
    /// Run the local rules against an already-normalized word
    ///
    /// Order: length, center letter, hive letters (if enabled), duplicate.
    ///
    /// # Errors
    ///
    /// Returns the `RejectReason` of the first rule that fails.
    pub fn check(
        &self,
        word: &Word,
        puzzle: &PuzzleDefinition,
        accepted: &AcceptedWords,
    ) -> Result<(), RejectReason> {
        let actual = word.len();
        if actual < self.min_length {
            return Err(RejectReason::TooShort {
                min: self.min_length,
                actual,
            });
        }

        let center = puzzle.center_letter();
        if !word.has_letter(center) {
            return Err(RejectReason::MissingCenterLetter(center));
        }

        if self.restrict_to_puzzle_letters && !word.uses_only(&puzzle.letters()) {
            return Err(RejectReason::InvalidLetters);
        }

        if accepted.contains(word.text()) {
            return Err(RejectReason::DuplicateWord);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle() -> PuzzleDefinition {
        PuzzleDefinition::builder("test", 'a', &['b', 'c', 'e', 'g', 'l', 'n'])
            .total_words(10)
            .build()
            .unwrap()
    }

    fn check(
        rules: ValidationRules,
        raw: &str,
        accepted: &AcceptedWords,
    ) -> Result<(), RejectReason> {
        rules.check(&Word::new(raw), &puzzle(), accepted)
    }

    #[test]
    fn cat_is_too_short() {
        assert_eq!(
            check(ValidationRules::default(), "cat", &AcceptedWords::new()),
            Err(RejectReason::TooShort { min: 4, actual: 3 })
        );
    }

    #[test]
    fn length_is_measured_after_trimming() {
        assert_eq!(
            check(ValidationRules::default(), "  cab  ", &AcceptedWords::new()),
            Err(RejectReason::TooShort { min: 4, actual: 3 })
        );
    }

    #[test]
    fn length_rule_runs_before_center_rule() {
        assert!(matches!(
            check(ValidationRules::default(), "bee", &AcceptedWords::new()),
            Err(RejectReason::TooShort { .. })
        ));
    }

    #[test]
    fn center_letter_required() {
        assert_eq!(
            check(ValidationRules::default(), "beech", &AcceptedWords::new()),
            Err(RejectReason::MissingCenterLetter('a'))
        );
        assert_eq!(
            check(ValidationRules::default(), "CABBAGE", &AcceptedWords::new()),
            Ok(())
        );
    }

    #[test]
    fn duplicates_ignore_case() {
        let mut accepted = AcceptedWords::new();
        accepted.insert("cabbage");
        assert_eq!(
            check(ValidationRules::default(), "CabBage", &accepted),
            Err(RejectReason::DuplicateWord)
        );
    }

    #[test]
    fn hive_letters_only_when_enabled() {
        let strict = ValidationRules {
            restrict_to_puzzle_letters: true,
            ..ValidationRules::default()
        };
        let empty = AcceptedWords::new();

        assert_eq!(check(ValidationRules::default(), "alpha", &empty), Ok(()));
        assert_eq!(check(strict, "alpha", &empty), Err(RejectReason::InvalidLetters));
        assert_eq!(check(strict, "bagel", &empty), Ok(()));
    }

    #[test]
    fn custom_minimum() {
        let rules = ValidationRules {
            min_length: 6,
            ..ValidationRules::default()
        };
        assert_eq!(
            check(rules, "bagel", &AcceptedWords::new()),
            Err(RejectReason::TooShort { min: 6, actual: 5 })
        );
    }
}
