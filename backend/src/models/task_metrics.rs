use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user task counters. Nine independent tallies, all defaulting to
/// zero; a user without a row reads as all zeros.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct TaskMetrics {
    pub user_id: Uuid,
    pub total_tasks: i64,
    pub open_tasks: i64,
    pub in_progress_tasks: i64,
    pub completed_tasks: i64,
    pub overdue_tasks: i64,
    pub archived_tasks: i64,
    pub high_priority_tasks: i64,
    pub medium_priority_tasks: i64,
    pub low_priority_tasks: i64,
}

impl TaskMetrics {
    pub fn zero(user_id: Uuid) -> Self {
        Self {
            user_id,
            total_tasks: 0,
            open_tasks: 0,
            in_progress_tasks: 0,
            completed_tasks: 0,
            overdue_tasks: 0,
            archived_tasks: 0,
            high_priority_tasks: 0,
            medium_priority_tasks: 0,
            low_priority_tasks: 0,
        }
    }
}
