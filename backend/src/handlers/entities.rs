//! Generic CRUD handlers.
//!
//! One set of handlers serves every uniform custom entity (labels, tags,
//! statuses, priorities, custom fields, recurring rules, reminders,
//! projects); the concrete entity is picked at route-registration time via
//! [`crud_routes`]. Create bodies are validated against the entity's
//! [`RuleSet`] as raw JSON first, then deserialized, so the typed payload
//! the repository sees is exactly what the client submitted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::repositories::crud::{CrudEntity, CrudRepository};
use crate::state::AppState;

pub async fn create<E: CrudEntity>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<E>), AppError> {
    E::create_rules().validate(&body)?;
    let payload: E::Create = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let record = CrudRepository::<E>::new()
        .create(&state.pool, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list<E: CrudEntity>(State(state): State<AppState>) -> Result<Json<Vec<E>>, AppError> {
    let records = CrudRepository::<E>::new().find_all(&state.pool).await?;
    Ok(Json(records))
}

pub async fn update<E: CrudEntity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<Json<E>, AppError> {
    let changes: E::Update = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    match CrudRepository::<E>::new()
        .update(&state.pool, id, &changes)
        .await?
    {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound("Resource not found".to_string())),
    }
}

pub async fn remove<E: CrudEntity>(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = CrudRepository::<E>::new().delete(&state.pool, id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Resource not found".to_string()))
    }
}

/// Standard route group for a uniform CRUD entity, nested under its path.
pub fn crud_routes<E: CrudEntity>() -> Router<AppState> {
    Router::new()
        .route("/", post(create::<E>).get(list::<E>))
        .route("/{id}", put(update::<E>).delete(remove::<E>))
}
