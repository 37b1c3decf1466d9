use std::sync::LazyLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::assignee::{Assignee, AssigneeWithUser, CreateAssignee, UpdateAssignee};
use crate::repositories::assignee::AssigneeRepository;
use crate::state::AppState;
use crate::validation::{RuleSet, ValidationRule};

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            "task_id",
            vec![ValidationRule::required("Task id is required")],
        )
        .field(
            "user_id",
            vec![ValidationRule::required("User id is required")],
        )
});

pub async fn create_assignee(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Assignee>), AppError> {
    CREATE_RULES.validate(&body)?;
    let payload: CreateAssignee = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let created = AssigneeRepository::new()
        .create(&state.pool, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Assignees with their user reference resolved.
pub async fn list_assignees(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssigneeWithUser>>, AppError> {
    let items = AssigneeRepository::new().find_all(&state.pool).await?;
    Ok(Json(items))
}

pub async fn update_assignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<Assignee>, AppError> {
    let changes: UpdateAssignee = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    match AssigneeRepository::new()
        .update(&state.pool, id, &changes)
        .await?
    {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound("Assignee not found".to_string())),
    }
}

pub async fn delete_assignee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if AssigneeRepository::new().delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Assignee not found".to_string()))
    }
}
