//! Bounded word → validity cache
//!
//! Dictionary membership does not change while the process runs, so entries
//! never expire; they only leave when capacity forces the oldest one out.

use crate::core::normalize;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Default number of words remembered
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache handle shared between the client and anything else that reads it
pub type SharedCache = Arc<Mutex<DictionaryCache>>;

/// FIFO-evicting map of normalized words to dictionary validity
#[derive(Debug, Clone)]
pub struct DictionaryCache {
    entries: FxHashMap<String, bool>,
    order: VecDeque<String>,
    capacity: usize,
}

impl DictionaryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` words
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            capacity,
        }
    }

    /// Wrap into the shared handle used by [`super::DictionaryClient`]
    #[must_use]
    pub fn shared(self) -> SharedCache {
        Arc::new(Mutex::new(self))
    }

    /// Look up a word; the key is trimmed and lowercased first
    #[must_use]
    pub fn get(&self, word: &str) -> Option<bool> {
        self.entries.get(&normalize(word)).copied()
    }

    /// Insert or overwrite a result
    ///
    /// A new key arriving at capacity evicts the oldest-inserted entry first.
    /// Overwrites keep their original position.
    pub fn put(&mut self, word: &str, is_valid: bool) {
        if self.capacity == 0 {
            return;
        }

        let key = normalize(word);
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = is_valid;
            return;
        }

        if self.entries.len() >= self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            self.entries.remove(&oldest);
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, is_valid);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new()
    }
}
