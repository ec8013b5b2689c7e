use std::sync::{Arc, RwLock};

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::models::User;
use crate::state::AppState;

/// The active session: at most one logged-in user at a time.
#[derive(Default)]
pub struct Session {
    current: RwLock<Option<User>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.read().unwrap().clone()
    }

    pub fn is_active(&self) -> bool {
        self.current.read().unwrap().is_some()
    }

    fn set(&self, user: User) {
        *self.current.write().unwrap() = Some(user);
    }

    fn clear(&self) {
        *self.current.write().unwrap() = None;
    }

    /// Refreshes the session copy when the active user's record is edited, so
    /// permission and display changes take effect without a re-login.
    pub(crate) fn refresh_if_active(&self, user: &User) {
        let mut current = self.current.write().unwrap();
        if current.as_ref().map(|u| u.id.as_str()) == Some(user.id.as_str()) {
            *current = Some(user.clone());
        }
    }

    pub(crate) fn drop_if_active(&self, user_id: &str) {
        let mut current = self.current.write().unwrap();
        if current.as_ref().map(|u| u.id.as_str()) == Some(user_id) {
            *current = None;
        }
    }
}

/// Authenticates against the in-memory user table and owns the session.
///
/// Credentials are compared in plaintext by design; there is no lockout,
/// throttling or hashing in scope.
#[derive(Clone)]
pub struct AuthService {
    state: Arc<AppState>,
    session: Arc<Session>,
}

impl AuthService {
    pub fn new(state: Arc<AppState>, session: Arc<Session>) -> Self {
        Self { state, session }
    }

    /// Succeeds only on an exact match of both username and password. The
    /// failure carries no detail about which field was wrong.
    #[instrument(skip(self, password), fields(username = %username))]
    pub fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let users = self.state.users.read().unwrap();
        let user = users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned();
        drop(users);

        match user {
            Some(user) => {
                self.session.set(user.clone());
                info!(user_id = %user.id, role = %user.role, "Login succeeded");
                Ok(user)
            }
            None => {
                warn!("Login failed");
                Err(ServiceError::AuthenticationFailed)
            }
        }
    }

    pub fn logout(&self) {
        if let Some(user) = self.session.current_user() {
            info!(user_id = %user.id, "Logged out");
        }
        self.session.clear();
    }

    pub fn session(&self) -> Arc<Session> {
        self.session.clone()
    }
}
