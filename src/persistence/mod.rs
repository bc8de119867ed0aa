//! Key-value persistence
//!
//! Features:
//! - `KeyValueStore` seam shared by LocalStorage, a JSON file and memory
//! - Typed access to the working list and saved lists (`RosterStore`)
//! - Whole-value read-modify-write; one writer, no partial updates

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
pub use store::RosterStore;

use std::collections::BTreeMap;

use crate::error::Result;

/// String key to string value storage, shaped after browser LocalStorage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Volatile store for tests and one-shot runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
