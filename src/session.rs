use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserRole};

/// Authenticated identity as returned by the login/register endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Shared session store. The transport reads the token from it on every
/// request; the application writes it after a successful login and clears it
/// on logout. Cloning the store clones the handle, not the session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, session: Session) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session);
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.token.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.user.clone())
    }

    /// Role of the current user, `Guest` when nobody is signed in.
    pub fn role(&self) -> UserRole {
        self.current_user()
            .map(|u| u.role)
            .unwrap_or(UserRole::Guest)
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }
}
