//! Puzzle definitions
//!
//! A puzzle is immutable once loaded: the letter hive, how many words can be
//! found, and the trivia that unlocks along the way.

use super::word::normalize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for malformed puzzle data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("letter '{0}' is not an ASCII letter")]
    InvalidLetter(char),
    #[error("letter '{0}' appears more than once")]
    RepeatedLetter(char),
    #[error("puzzle has no outer letters")]
    NoOuterLetters,
    #[error("puzzle '{0}' declares no findable words")]
    NoWords(String),
}

/// A trivia clue revealed as progress thresholds are crossed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaClue {
    pub text: String,
}

/// The closing trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalChallenge {
    pub question: String,
    pub answer: String,
}

impl FinalChallenge {
    /// Compare an answer ignoring case and surrounding whitespace
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        normalize(answer) == normalize(&self.answer)
    }
}

/// Raw on-disk form, checked by [`PuzzleDefinition::try_from`]
#[derive(Debug, Clone, Deserialize)]
struct RawPuzzle {
    id: String,
    center_letter: char,
    outer_letters: Vec<char>,
    #[serde(default)]
    total_words: Option<usize>,
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    clues: Vec<TriviaClue>,
    final_challenge: FinalChallenge,
}

/// Immutable description of one puzzle instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPuzzle")]
pub struct PuzzleDefinition {
    id: String,
    center_letter: char,
    outer_letters: Vec<char>,
    total_words: usize,
    words: Vec<String>,
    clues: Vec<TriviaClue>,
    final_challenge: FinalChallenge,
}

impl TryFrom<RawPuzzle> for PuzzleDefinition {
    type Error = PuzzleError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        let mut builder = Self::builder(raw.id, raw.center_letter, &raw.outer_letters)
            .words(raw.words)
            .clues(raw.clues)
            .final_challenge(raw.final_challenge.question, raw.final_challenge.answer);
        if let Some(total) = raw.total_words {
            builder = builder.total_words(total);
        }
        builder.build()
    }
}

impl PuzzleDefinition {
    /// Start building a puzzle from its letter hive
    #[must_use]
    pub fn builder(id: impl Into<String>, center: char, outer: &[char]) -> PuzzleBuilder {
        PuzzleBuilder {
            id: id.into(),
            center,
            outer: outer.to_vec(),
            total_words: None,
            words: Vec::new(),
            clues: Vec::new(),
            final_challenge: FinalChallenge {
                question: String::new(),
                answer: String::new(),
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.center_letter
    }

    #[must_use]
    pub fn outer_letters(&self) -> &[char] {
        &self.outer_letters
    }

    /// Center letter followed by the outer letters
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        std::iter::once(self.center_letter)
            .chain(self.outer_letters.iter().copied())
            .collect()
    }

    /// Number of words that can be found in this puzzle
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    /// Known target words (may be empty when only a count was supplied)
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn clues(&self) -> &[TriviaClue] {
        &self.clues
    }

    #[must_use]
    pub const fn final_challenge(&self) -> &FinalChallenge {
        &self.final_challenge
    }
}

/// Builder for [`PuzzleDefinition`]
///
/// Letters are lowercased; `build` checks the hive is well formed.
#[derive(Debug, Clone)]
pub struct PuzzleBuilder {
    id: String,
    center: char,
    outer: Vec<char>,
    total_words: Option<usize>,
    words: Vec<String>,
    clues: Vec<TriviaClue>,
    final_challenge: FinalChallenge,
}

impl PuzzleBuilder {
    /// Explicit total; otherwise the size of the word list is used
    #[must_use]
    pub const fn total_words(mut self, total: usize) -> Self {
        self.total_words = Some(total);
        self
    }

    #[must_use]
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        self
    }

    #[must_use]
    pub fn clues<I>(mut self, clues: I) -> Self
    where
        I: IntoIterator<Item = TriviaClue>,
    {
        self.clues = clues.into_iter().collect();
        self
    }

    #[must_use]
    pub fn clue(mut self, text: impl Into<String>) -> Self {
        self.clues.push(TriviaClue { text: text.into() });
        self
    }

    #[must_use]
    pub fn final_challenge(
        mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        self.final_challenge = FinalChallenge {
            question: question.into(),
            answer: answer.into(),
        };
        self
    }

    /// Validate and produce the puzzle
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` if:
    /// - A letter is not an ASCII letter
    /// - A letter repeats (including the center among the outer letters)
    /// - There are no outer letters
    /// - Neither a word list nor a positive total was given
    pub fn build(self) -> Result<PuzzleDefinition, PuzzleError> {
        if self.outer.is_empty() {
            return Err(PuzzleError::NoOuterLetters);
        }

        let mut seen: Vec<char> = Vec::with_capacity(self.outer.len() + 1);
        for letter in std::iter::once(self.center).chain(self.outer.iter().copied()) {
            if !letter.is_ascii_alphabetic() {
                return Err(PuzzleError::InvalidLetter(letter));
            }
            let letter = letter.to_ascii_lowercase();
            if seen.contains(&letter) {
                return Err(PuzzleError::RepeatedLetter(letter));
            }
            seen.push(letter);
        }

        let mut words = self.words;
        words.sort();
        words.dedup();

        let total_words = self.total_words.unwrap_or(words.len());
        if total_words == 0 {
            return Err(PuzzleError::NoWords(self.id));
        }

        let center_letter = seen[0];
        let outer_letters = seen[1..].to_vec();

        Ok(PuzzleDefinition {
            id: self.id,
            center_letter,
            outer_letters,
            total_words,
            words,
            clues: self.clues,
            final_challenge: self.final_challenge,
        })
    }
}
