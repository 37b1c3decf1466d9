//! Assignee repository.
//!
//! Shaped like the generic CRUD repository but bespoke: its columns are
//! UUID references, and listing eagerly resolves the user side of the link.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::assignee::{Assignee, AssigneeWithUser, CreateAssignee, UpdateAssignee};
use crate::models::user::UserSummary;

const TABLE_NAME: &str = "assignees";
const SELECT_COLUMNS: &str = "id, task_id, user_id, created_at, updated_at";

#[derive(Debug, FromRow)]
struct AssigneeUserRow {
    id: Uuid,
    task_id: Uuid,
    user_id: Uuid,
    username: String,
    email: String,
    full_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AssigneeUserRow> for AssigneeWithUser {
    fn from(row: AssigneeUserRow) -> Self {
        Self {
            id: row.id,
            task_id: row.task_id,
            user: UserSummary {
                id: row.user_id,
                username: row.username,
                email: row.email,
                full_name: row.full_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AssigneeRepository;

impl AssigneeRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(&self, db: &PgPool, data: &CreateAssignee) -> Result<Assignee, AppError> {
        let query = format!(
            "INSERT INTO {} (id, task_id, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let now = Utc::now();
        let row = sqlx::query_as::<_, Assignee>(&query)
            .bind(Uuid::new_v4())
            .bind(data.task_id)
            .bind(data.user_id)
            .bind(now)
            .bind(now)
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    /// All assignees with the referenced user resolved in the same query.
    pub async fn find_all(&self, db: &PgPool) -> Result<Vec<AssigneeWithUser>, AppError> {
        let query = format!(
            "SELECT a.id, a.task_id, a.user_id, u.username, u.email, u.full_name, \
             a.created_at, a.updated_at \
             FROM {} a JOIN users u ON u.id = a.user_id \
             ORDER BY a.created_at ASC",
            TABLE_NAME
        );
        let rows = sqlx::query_as::<_, AssigneeUserRow>(&query)
            .fetch_all(db)
            .await?;
        Ok(rows.into_iter().map(AssigneeWithUser::from).collect())
    }

    pub async fn update(
        &self,
        db: &PgPool,
        id: Uuid,
        changes: &UpdateAssignee,
    ) -> Result<Option<Assignee>, AppError> {
        let query = format!(
            "UPDATE {} SET task_id = COALESCE($2, task_id), \
             user_id = COALESCE($3, user_id), updated_at = $4 \
             WHERE id = $1 RETURNING {}",
            TABLE_NAME, SELECT_COLUMNS
        );
        let row = sqlx::query_as::<_, Assignee>(&query)
            .bind(id)
            .bind(changes.task_id)
            .bind(changes.user_id)
            .bind(Utc::now())
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn delete(&self, db: &PgPool, id: Uuid) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}
