use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::notification::Notification;

const TABLE_NAME: &str = "notifications";
const SELECT_COLUMNS: &str = "id, user_id, content, seen, created_at";

/// Storage contract for notifications, behind a trait so the service layer
/// can be exercised without a database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: &Notification) -> Result<Notification, AppError>;

    /// Newest-first page of a user's notifications.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, AppError>;

    /// Flags a notification as seen; false when the id is unknown.
    async fn mark_seen(&self, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn insert(&self, notification: &Notification) -> Result<Notification, AppError> {
        let query = format!(
            "INSERT INTO {} (id, user_id, content, seen, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Notification>(&query)
            .bind(notification.id)
            .bind(notification.user_id)
            .bind(&notification.content)
            .bind(notification.seen)
            .bind(notification.created_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            SELECT_COLUMNS, TABLE_NAME
        );
        let rows = sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn mark_seen(&self, id: Uuid) -> Result<bool, AppError> {
        let query = format!("UPDATE {} SET seen = TRUE WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
