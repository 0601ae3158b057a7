//! Persistence port for per-player state
//!
//! The game core never touches storage directly; callers inject a
//! [`KeyValueStore`] and read or write [`PlayStats`] through it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Error type for storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key-value persistence
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store, mainly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whole-file JSON object store
///
/// Every write rewrites the file; fine for a handful of keys.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(FxHashMap::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

const STATS_KEY: &str = "play_stats";

/// Lifetime play counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayStats {
    pub games_played: u32,
    pub words_found: u32,
    pub pangrams_found: u32,
    pub puzzles_completed: u32,
    pub final_challenges_won: u32,
}

impl PlayStats {
    /// Load stats, defaulting when nothing was stored yet
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or holds unreadable data.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        match store.get(STATS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Self::default()),
        }
    }

    /// Persist stats
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(STATS_KEY, &serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("key", "value").unwrap();
        store.set("key", "newer").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("newer"));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn file_store_reports_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("a"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn stats_default_then_accumulate() {
        let store = MemoryStore::new();
        let mut stats = PlayStats::load(&store).unwrap();
        assert_eq!(stats, PlayStats::default());

        stats.games_played += 1;
        stats.words_found += 12;
        stats.save(&store).unwrap();

        let loaded = PlayStats::load(&store).unwrap();
        assert_eq!(loaded.games_played, 1);
        assert_eq!(loaded.words_found, 12);
    }
}
