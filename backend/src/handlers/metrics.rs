use axum::{
    extract::{Extension, State},
    Json,
};

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::task_metrics::TaskMetrics;
use crate::repositories::task_metrics::TaskMetricsRepository;
use crate::state::AppState;

/// Task counters for the authenticated user; all zeros until the first
/// task is tracked.
pub async fn get_my_metrics(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<TaskMetrics>, AppError> {
    let metrics = TaskMetricsRepository::new()
        .find_for_user(&state.pool, user.id)
        .await?;
    Ok(Json(metrics))
}
