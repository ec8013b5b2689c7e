use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::Notification;
use crate::state::AppState;

/// Sink for operator-facing notifications. The event loop only needs `push`;
/// the trait boundary keeps the loop testable with a capturing fake.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn push(&self, notification: Notification);
}

/// Notification store backed by the shared in-memory state.
#[derive(Clone)]
pub struct NotificationService {
    state: Arc<AppState>,
}

impl NotificationService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Most recent notifications first.
    pub fn list(&self, limit: usize) -> Vec<Notification> {
        let notifications = self.state.notifications.read().unwrap();
        notifications.iter().take(limit).cloned().collect()
    }

    pub fn unread_count(&self) -> usize {
        self.state
            .notifications
            .read()
            .unwrap()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    #[instrument(skip(self))]
    pub fn mark_as_read(&self, notification_id: Uuid) -> Result<(), ServiceError> {
        let mut notifications = self.state.notifications.write().unwrap();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| {
                ServiceError::not_found("Notification", &notification_id.to_string())
            })?;
        notification.read = true;
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for NotificationService {
    async fn push(&self, notification: Notification) {
        let mut notifications = self.state.notifications.write().unwrap();
        notifications.insert(0, notification);
    }
}
