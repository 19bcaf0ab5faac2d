//! Key-value slots backing the persisted game state.
//!
//! The store and the settings preference each live under a single fixed key.
//! This trait abstracts the backing storage, allowing an in-memory mock for
//! tests and alternative hosts (e.g., a platform preference API).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Durable string-valued key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if the key was never
    /// written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key` in a single write; no partial
    /// value is observable through `read`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding.
///
/// Writes can be switched to fail, to verify that callers degrade gracefully
/// when durable storage is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with corrupt content.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make all subsequent writes fail with `PersistenceWriteFailed`.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::PersistenceWriteFailed(
                "simulated write failure".to_string(),
            ));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert!(store.read("playerScores").unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());

        store.write("difficulty", "Medium").unwrap();
        assert_eq!(store.read("difficulty").unwrap().as_deref(), Some("Medium"));

        // Overwrite replaces the prior value
        store.write("difficulty", "Hard").unwrap();
        assert_eq!(store.read("difficulty").unwrap().as_deref(), Some("Hard"));
    }

    #[test]
    fn test_file_store_creates_base_dir() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested").join("data"));
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let mut store = MemoryStore::new();
        store.write("k", "v").unwrap();

        store.fail_writes(true);
        assert!(matches!(
            store.write("k", "w"),
            Err(Error::PersistenceWriteFailed(_))
        ));
        // Prior value untouched
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}
