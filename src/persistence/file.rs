//! JSON file backend for the native binary
//!
//! The whole file is one JSON object of key -> string value, mirroring what
//! LocalStorage holds in the browser. Every write rewrites the file through
//! a temp file and rename.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{Result, RosterError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(storage_error(&path, e)),
        };
        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error(&self.path, e))?;
        Ok(())
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> RosterError {
    RosterError::Storage(format!("{}: {}", path.display(), err))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.items.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.items.insert(key.to_string(), old),
                None => self.items.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let Some(previous) = self.items.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.items.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("allClassLists", r#"{"Math":["Ana"]}"#).unwrap();
        store.set("gone", "x").unwrap();
        store.remove("gone").unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.get("allClassLists").unwrap().as_deref(),
            Some(r#"{"Math":["Ana"]}"#)
        );
        assert_eq!(store.get("gone").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(FileStore::open(&path), Err(RosterError::Serde(_))));
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("store.json");
        let mut store = FileStore::open(&path).unwrap();
        assert!(matches!(store.set("k", "v"), Err(RosterError::Storage(_))));
        assert_eq!(store.get("k").unwrap(), None);
    }
}
