//! Session Store
//!
//! Serializes the `{token, user}` record under a single storage key.

use std::sync::Arc;

use crate::config::SESSION_STORAGE_KEY;
use crate::error::AppResult;
use crate::models::Session;
use super::storage::SessionStorage;

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    key: &'static str,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, key: SESSION_STORAGE_KEY }
    }

    /// Write the record in one key write
    pub fn save(&self, session: &Session) -> AppResult<()> {
        let json = serde_json::to_string(session)?;
        self.storage.set(self.key, &json)
    }

    /// Stored session; corrupt records count as absent, storage failures are returned
    pub fn try_read(&self) -> AppResult<Option<Session>> {
        let Some(raw) = self.storage.get(self.key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!("[Session] discarding corrupt record: {}", e);
                Ok(None)
            }
        }
    }

    /// Stored session, or absent if unreadable
    pub fn read(&self) -> Option<Session> {
        self.try_read().unwrap_or_else(|e| {
            log::warn!("[Session] read failed: {}", e);
            None
        })
    }

    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(self.key)
    }

    /// Bearer token of the stored session
    pub fn token(&self) -> Option<String> {
        self.read().map(|s| s.token)
    }

    pub fn exists(&self) -> bool {
        self.read().is_some()
    }
}
