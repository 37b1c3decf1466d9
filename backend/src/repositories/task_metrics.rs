use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::task_metrics::TaskMetrics;

const TABLE_NAME: &str = "task_metrics";
const SELECT_COLUMNS: &str = "user_id, total_tasks, open_tasks, in_progress_tasks, \
     completed_tasks, overdue_tasks, archived_tasks, high_priority_tasks, \
     medium_priority_tasks, low_priority_tasks";

#[derive(Debug, Default, Clone, Copy)]
pub struct TaskMetricsRepository;

impl TaskMetricsRepository {
    pub fn new() -> Self {
        Self
    }

    /// Counters for a user; a missing row reads as all zeros.
    pub async fn find_for_user(&self, db: &PgPool, user_id: Uuid) -> Result<TaskMetrics, AppError> {
        let query = format!(
            "SELECT {} FROM {} WHERE user_id = $1",
            SELECT_COLUMNS, TABLE_NAME
        );
        let row = sqlx::query_as::<_, TaskMetrics>(&query)
            .bind(user_id)
            .fetch_optional(db)
            .await?;
        Ok(row.unwrap_or_else(|| TaskMetrics::zero(user_id)))
    }
}
