//! Key-value storage backends.
//!
//! The roster is a single string value under a single key, the same shape
//! as browser local storage. [`FileStore`] keeps every key in one JSON
//! object on disk; [`MemoryStore`] is for tests and throwaway sessions.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageResult;

/// A string-to-string store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON file mapping keys to string values.
///
/// A missing file reads as an empty store. Writes rewrite the whole file and
/// create parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at `path`. Nothing is read or written until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> StorageResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // An unreadable file is replaced rather than blocking every write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
