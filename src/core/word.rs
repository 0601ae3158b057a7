//! Candidate word handling
//!
//! Normalization and letter-set helpers shared by the cache, the validator and
//! the puzzle definitions.

use rustc_hash::FxHashSet;
use std::fmt;

/// Normalize raw user input: trim surrounding whitespace and lowercase.
///
/// # Examples
/// ```
/// use word_hive::core::normalize;
///
/// assert_eq!(normalize("  CaBBage\n"), "cabbage");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A normalized candidate word
///
/// Cheap wrapper that remembers the letters it uses so the letter rules do not
/// rescan the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

impl Word {
    /// Normalize `raw` into a word
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check that every letter of the word is one of `allowed`
    #[must_use]
    pub fn uses_only(&self, allowed: &[char]) -> bool {
        self.letters.iter().all(|c| allowed.contains(c))
    }

    /// Check that the word uses every one of `letters` at least once
    ///
    /// An empty letter set never makes a pangram.
    #[must_use]
    pub fn is_pangram(&self, letters: &[char]) -> bool {
        !letters.is_empty() && letters.iter().all(|c| self.letters.contains(c))
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
