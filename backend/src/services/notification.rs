use std::sync::Arc;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::notification::Notification;
use crate::models::PageQuery;
use crate::repositories::notification::NotificationRepository;

/// Thin data-access wrapper around the notification store. No batching,
/// no delivery transport, no retry.
#[derive(Clone)]
pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new notification, unseen, stamped with the current time.
    pub async fn create(&self, user_id: Uuid, content: String) -> Result<Notification, AppError> {
        let notification = Notification::new(user_id, content);
        self.repository.insert(&notification).await
    }

    /// A user's notifications, newest first.
    pub async fn list(&self, user_id: Uuid, page: PageQuery) -> Result<Vec<Notification>, AppError> {
        self.repository
            .list_for_user(user_id, page.limit, page.skip())
            .await
    }

    /// Returns false when the id does not exist.
    pub async fn mark_seen(&self, id: Uuid) -> Result<bool, AppError> {
        self.repository.mark_seen(id).await
    }
}
