use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::UserSummary;

/// Links a user to a task. The task catalog itself lives outside this
/// service, so `task_id` carries no foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignee {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignee {
    pub task_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAssignee {
    pub task_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

/// Listing variant with the user reference eagerly resolved.
#[derive(Debug, Clone, Serialize)]
pub struct AssigneeWithUser {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
