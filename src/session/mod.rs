//! Session Layer
//!
//! Persisted login record plus the in-memory auth state derived from it.

mod storage;
mod store;
mod service;

pub use storage::{SessionStorage, LocalStorage, MemoryStorage};
pub use store::SessionStore;
pub use service::{SessionService, use_session};
