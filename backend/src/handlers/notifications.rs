use std::sync::{Arc, LazyLock};

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::notification::{CreateNotificationPayload, Notification};
use crate::models::PageQuery;
use crate::repositories::notification::PgNotificationRepository;
use crate::services::notification::NotificationService;
use crate::state::AppState;
use crate::validation::{RuleSet, ValidationRule};

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            "user_id",
            vec![ValidationRule::required("User id is required")],
        )
        .field(
            "content",
            vec![ValidationRule::required("Content is required")],
        )
});

fn service(state: &AppState) -> NotificationService {
    NotificationService::new(Arc::new(PgNotificationRepository::new(state.pool.clone())))
}

pub async fn create_notification(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Notification>), AppError> {
    CREATE_RULES.validate(&body)?;
    let payload: CreateNotificationPayload = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let created = service(&state)
        .create(payload.user_id, payload.content)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// The authenticated caller's notifications, newest first.
pub async fn list_my_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let items = service(&state).list(user.id, page).await?;
    Ok(Json(items))
}

pub async fn mark_notification_seen(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if service(&state).mark_seen(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Notification not found".to_string()))
    }
}
