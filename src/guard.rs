//! Route Guard
//!
//! Navigation-time check for protected views. These checks only shape the UI;
//! the backend still authorizes every request.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

use crate::error::AppResult;
use crate::models::Session;
use crate::session::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const CATALOG_PATH: &str = "/private/sweets";

/// What a protected route requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Session,
    Admin,
}

/// `Checking → Denied | Authorized`, restarted on every protected navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPhase {
    Checking,
    Denied { redirect: &'static str },
    Authorized,
}

impl GuardPhase {
    /// Decide from the session lookup; a failed lookup denies
    pub fn resolve(check: AppResult<Option<Session>>, access: Access) -> Self {
        match check {
            Ok(Some(session)) => match access {
                Access::Session => GuardPhase::Authorized,
                Access::Admin if session.user.is_admin() => GuardPhase::Authorized,
                Access::Admin => GuardPhase::Denied { redirect: CATALOG_PATH },
            },
            Ok(None) => GuardPhase::Denied { redirect: LOGIN_PATH },
            Err(e) => {
                log::warn!("[Guard] session check failed, denying: {}", e);
                GuardPhase::Denied { redirect: LOGIN_PATH }
            }
        }
    }
}

/// Wait out the minimum loading duration, then consult the stored session
pub async fn check_access(store: &SessionStore, access: Access, min_loading: Duration) -> GuardPhase {
    if !min_loading.is_zero() {
        let millis = u32::try_from(min_loading.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
    let phase = GuardPhase::resolve(store.try_read(), access);
    log::debug!("[Guard] {:?} check resolved to {:?}", access, phase);
    phase
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::executor::block_on;

    use super::*;
    use crate::error::AppError;
    use crate::models::{Role, User};
    use crate::session::{MemoryStorage, SessionStorage};

    fn session(role: Role) -> Session {
        Session {
            token: "t".to_string(),
            user: User { name: "kim".to_string(), email: None, role },
        }
    }

    #[test]
    fn test_no_session_is_denied_to_login() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let phase = block_on(check_access(&store, Access::Session, Duration::ZERO));
        assert_eq!(phase, GuardPhase::Denied { redirect: LOGIN_PATH });
    }

    #[test]
    fn test_session_is_authorized() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        store.save(&session(Role::User)).unwrap();
        let phase = block_on(check_access(&store, Access::Session, Duration::ZERO));
        assert_eq!(phase, GuardPhase::Authorized);
    }

    #[test]
    fn test_admin_access() {
        assert_eq!(
            GuardPhase::resolve(Ok(Some(session(Role::Admin))), Access::Admin),
            GuardPhase::Authorized
        );
        assert_eq!(
            GuardPhase::resolve(Ok(Some(session(Role::User))), Access::Admin),
            GuardPhase::Denied { redirect: CATALOG_PATH }
        );
        assert_eq!(
            GuardPhase::resolve(Ok(None), Access::Admin),
            GuardPhase::Denied { redirect: LOGIN_PATH }
        );
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Storage("SecurityError".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Storage("SecurityError".to_string()))
        }
        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::Storage("SecurityError".to_string()))
        }
    }

    #[test]
    fn test_failed_check_fails_closed() {
        let store = SessionStore::new(Arc::new(BrokenStorage));
        let phase = block_on(check_access(&store, Access::Session, Duration::ZERO));
        assert_eq!(phase, GuardPhase::Denied { redirect: LOGIN_PATH });
    }
}
