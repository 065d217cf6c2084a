//! Session Service
//!
//! Single authority for login state: every transition writes the persisted
//! record and the in-memory [`AuthState`] together.

use leptos::prelude::*;

use crate::error::AppResult;
use crate::models::{Session, User};
use super::store::SessionStore;

/// In-memory auth state derived from the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub is_admin: bool,
}

impl AuthState {
    pub fn logged_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            is_admin: user.is_admin(),
            user: Some(user),
        }
    }

    pub fn from_session(session: Option<&Session>) -> Self {
        session
            .map(|s| Self::logged_in(s.user.clone()))
            .unwrap_or_default()
    }
}

/// Process-wide session service, provided via context
#[derive(Clone)]
pub struct SessionService {
    store: SessionStore,
    state: RwSignal<AuthState>,
}

impl SessionService {
    /// Build the service and hydrate state from storage
    pub fn new(store: SessionStore) -> Self {
        let service = Self { store, state: RwSignal::new(AuthState::default()) };
        service.hydrate();
        service
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Re-read storage into memory
    pub fn hydrate(&self) {
        let state = AuthState::from_session(self.store.read().as_ref());
        log::debug!("[Session] hydrated, authenticated={}", state.is_authenticated);
        self.state.set(state);
    }

    /// Persist, then update memory; memory is untouched if the write fails
    pub fn login(&self, session: Session) -> AppResult<()> {
        self.store.save(&session)?;
        log::info!("[Session] logged in as {} ({})", session.user.name, session.user.role.as_str());
        self.state.set(AuthState::logged_in(session.user));
        Ok(())
    }

    /// Clear storage, then reset memory; memory is untouched if the clear fails
    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()?;
        self.state.set(AuthState::default());
        log::info!("[Session] logged out");
        Ok(())
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(|s| s.is_admin)
    }
}

/// Get the session service from context
pub fn use_session() -> SessionService {
    expect_context::<SessionService>()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::Role;
    use crate::session::{MemoryStorage, SessionStorage};

    fn session(role: Role) -> Session {
        Session {
            token: "abc".to_string(),
            user: User { name: "ann".to_string(), email: Some("ann@example.com".to_string()), role },
        }
    }

    fn fresh_store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_auth_state_transitions() {
        let admin = AuthState::from_session(Some(&session(Role::Admin)));
        assert!(admin.is_authenticated);
        assert!(admin.is_admin);

        let user = AuthState::logged_in(session(Role::User).user);
        assert!(user.is_authenticated);
        assert!(!user.is_admin);

        assert_eq!(AuthState::from_session(None), AuthState::default());
    }

    #[test]
    fn test_hydrate_after_save() {
        let owner = Owner::new();
        owner.set();

        for role in [Role::User, Role::Admin] {
            let store = fresh_store();
            store.save(&session(role)).unwrap();
            let service = SessionService::new(store);
            assert!(service.is_authenticated());
            assert_eq!(service.is_admin(), role == Role::Admin);
            assert_eq!(service.store().token().as_deref(), Some("abc"));
        }
    }

    #[test]
    fn test_login_logout_keep_storage_in_sync() {
        let owner = Owner::new();
        owner.set();

        let service = SessionService::new(fresh_store());
        assert!(!service.is_authenticated());

        service.login(session(Role::Admin)).unwrap();
        assert!(service.store().exists());
        assert!(service.is_admin());

        service.logout().unwrap();
        assert!(!service.store().exists());
        assert!(!service.is_authenticated());
        assert_eq!(service.state().get_untracked().user, None);

        // Reload after logout stays logged out
        service.hydrate();
        assert!(!service.is_authenticated());
    }

    struct ReadOnlyStorage;

    impl SessionStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(crate::error::AppError::Storage("quota".to_string()))
        }
        fn remove(&self, _key: &str) -> AppResult<()> {
            Ok(())
        }
    }

    /// Storage that keeps its record no matter what
    struct StuckStorage(MemoryStorage);

    impl SessionStorage for StuckStorage {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get(key)
        }
        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.0.set(key, value)
        }
        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(crate::error::AppError::Storage("locked".to_string()))
        }
    }

    #[test]
    fn test_failed_clear_keeps_memory_logged_in() {
        let owner = Owner::new();
        owner.set();

        let service = SessionService::new(SessionStore::new(Arc::new(StuckStorage(MemoryStorage::new()))));
        service.login(session(Role::User)).unwrap();

        assert!(service.logout().is_err());
        assert!(service.store().exists());
        assert!(service.is_authenticated());

        // A later re-read agrees with memory instead of silently logging back in
        service.hydrate();
        assert!(service.is_authenticated());
    }

    #[test]
    fn test_failed_persist_leaves_memory_logged_out() {
        let owner = Owner::new();
        owner.set();

        let service = SessionService::new(SessionStore::new(Arc::new(ReadOnlyStorage)));
        assert!(service.login(session(Role::User)).is_err());
        assert!(!service.is_authenticated());
    }
}
