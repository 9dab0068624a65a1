use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Scope;
use crate::error::Result;

/// A string key-value store, scoped either to disk or to the running process.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Process-lifetime store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file.
///
/// The whole file is rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`.
    ///
    /// A missing or unreadable file opens as an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed store file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) => {
                log::debug!("No store file at {} ({}), starting empty", path.display(), e);
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        log::debug!("Wrote {} keys to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Open the store for a scope.
///
/// Only `Local` touches `path`; `Session` keeps everything in memory.
pub fn open_store(scope: Scope, path: &Path) -> Box<dyn KeyValueStore> {
    match scope {
        Scope::Local => Box::new(FileStore::open(path)),
        Scope::Session => {
            log::debug!("Session scope: {} is not used", path.display());
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);
        store.set("a", "1".to_string()).unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("theme", "dark".to_string()).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_malformed_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let store = FileStore::open(file.path());
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path);
        store.set("a", "1".to_string()).unwrap();
        store.set("b", "2".to_string()).unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("a"), None);
        assert_eq!(reopened.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_session_scope_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuel_state.json");

        let mut store = open_store(Scope::Session, &path);
        store.set("theme", "dark".to_string()).unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(!path.exists());

        let fresh = open_store(Scope::Session, &path);
        assert_eq!(fresh.get("theme"), None);
    }

    #[test]
    fn test_session_scope_ignores_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuel_state.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let mut store = open_store(Scope::Session, &path);
        assert_eq!(store.get("theme"), None);
        store.set("theme", "light".to_string()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"theme": "dark"}"#);
    }

    #[test]
    fn test_local_scope_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fuel_state.json");

        let mut store = open_store(Scope::Local, &path);
        store.set("theme", "dark".to_string()).unwrap();
        assert!(path.exists());

        let reopened = open_store(Scope::Local, &path);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nope.json"));
        assert_eq!(store.get("anything"), None);
    }
}
