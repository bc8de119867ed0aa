//! Browser LocalStorage backend

use web_sys::Storage;

use crate::error::{Result, RosterError};
use crate::persistence::KeyValueStore;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// The window's LocalStorage, if the browser allows it
    pub fn open() -> Result<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| RosterError::Storage("LocalStorage is not available".into()))?;
        Ok(Self { storage })
    }
}

fn js_error(op: &str, key: &str, err: wasm_bindgen::JsValue) -> RosterError {
    RosterError::Storage(format!("{} {}: {:?}", op, key, err))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}
