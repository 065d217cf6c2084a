//! Key/value backends for the session record.

use std::collections::HashMap;
use std::sync::RwLock;

use wasm_bindgen::JsValue;

use crate::error::{AppError, AppResult};

/// Minimal string storage, shaped after the browser `Storage` API
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Browser `localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> AppResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| AppError::Storage("localStorage disabled".to_string()))
    }

    /// Whether `localStorage` can be reached at all
    pub fn available() -> bool {
        Self::storage().is_ok()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        Self::storage()?.remove_item(key).map_err(js_err)
    }
}

fn js_err(e: JsValue) -> AppError {
    AppError::Storage(format!("{:?}", e))
}

/// Process-local storage; used when the browser refuses `localStorage`
/// (the session then lasts only until reload) and in tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|e| AppError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|e| AppError::Storage(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
