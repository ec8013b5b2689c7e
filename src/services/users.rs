use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::auth::Session;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{User, UserRole};
use crate::state::AppState;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub role: UserRole,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// User administration. Holds the session so an edit to the active user is
/// reflected there immediately.
#[derive(Clone)]
pub struct UserService {
    state: Arc<AppState>,
    session: Arc<Session>,
    event_sender: EventSender,
}

impl UserService {
    pub fn new(state: Arc<AppState>, session: Arc<Session>, event_sender: EventSender) -> Self {
        Self {
            state,
            session,
            event_sender,
        }
    }

    #[instrument(skip(self, request), fields(username = %request.username, role = %request.role))]
    pub async fn add_user(&self, request: CreateUserRequest) -> Result<User, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        {
            let users = self.state.users.read().unwrap();
            if users.iter().any(|u| u.username == request.username) {
                return Err(ServiceError::InvalidOperation(format!(
                    "Username {} is already taken",
                    request.username
                )));
            }
        }

        let initials: String = request
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect();
        let user = User {
            id: format!("u-{}", Uuid::new_v4().simple()),
            name: request.name,
            role: request.role,
            username: request.username,
            password: request.password,
            avatar: Some(initials.to_uppercase()),
            email: request.email,
            phone: request.phone,
        };

        {
            let mut users = self.state.users.write().unwrap();
            users.push(user.clone());
        }

        info!(user_id = %user.id, "User added");
        Ok(user)
    }

    /// Replaces the stored record by id. If the updated user is the active
    /// session's user, the session copy is refreshed too.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update_user(&self, user: User) -> Result<(), ServiceError> {
        {
            let mut users = self.state.users.write().unwrap();
            let stored = users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or_else(|| ServiceError::not_found("User", &user.id))?;
            *stored = user.clone();
        }

        self.session.refresh_if_active(&user);
        info!("User updated");

        self.event_sender
            .send(Event::UserUpdated { user_id: user.id })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    pub fn delete_user(&self, user_id: &str) -> Result<(), ServiceError> {
        let removed = {
            let mut users = self.state.users.write().unwrap();
            let before = users.len();
            users.retain(|u| u.id != user_id);
            before != users.len()
        };
        if !removed {
            return Err(ServiceError::not_found("User", user_id));
        }
        self.session.drop_if_active(user_id);
        info!("User deleted");
        Ok(())
    }
}
