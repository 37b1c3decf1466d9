use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::user::UserResponse;
use crate::models::PageQuery;
use crate::repositories::user::UserRepository;
use crate::state::AppState;

/// Admin-only paginated user listing.
pub async fn list_users(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserRepository::new()
        .list(&state.pool, page.limit, page.skip())
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if UserRepository::new().delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
