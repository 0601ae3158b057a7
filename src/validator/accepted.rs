//! Words found so far in the active puzzle

use crate::core::normalize;
use rustc_hash::FxHashSet;

/// Append-only list of accepted words
///
/// Keeps discovery order for display and a set for case-insensitive
/// membership.
#[derive(Debug, Clone, Default)]
pub struct AcceptedWords {
    order: Vec<String>,
    members: FxHashSet<String>,
}

impl AcceptedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the normalized form of `word` was already accepted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(&normalize(word))
    }

    /// Append `word` unless already present; returns whether it was added
    pub fn insert(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if !self.members.insert(word.clone()) {
            return false;
        }
        self.order.push(word);
        true
    }

    /// Words in discovery order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}
