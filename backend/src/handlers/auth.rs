use std::sync::LazyLock;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::error::AppError;
use crate::models::user::{LoginPayload, LoginResponse, RegisterPayload, User, UserResponse};
use crate::repositories::user::UserRepository;
use crate::state::AppState;
use crate::utils::{jwt, password};
use crate::validation::{RuleSet, ValidationRule};

const DEFAULT_ROLE: &str = "member";

static REGISTER_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            "username",
            vec![
                ValidationRule::required("Username is required"),
                ValidationRule::min_length(3, "Username must be at least 3 characters"),
            ],
        )
        .field(
            "email",
            vec![
                ValidationRule::required("Email is required"),
                ValidationRule::email("Email is invalid"),
            ],
        )
        .field(
            "password",
            vec![
                ValidationRule::required("Password is required"),
                ValidationRule::min_length(8, "Password must be at least 8 characters"),
            ],
        )
});

static LOGIN_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            "username",
            vec![ValidationRule::required("Username is required")],
        )
        .field(
            "password",
            vec![ValidationRule::required("Password is required")],
        )
});

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    REGISTER_RULES.validate(&body)?;
    let payload: RegisterPayload = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let password_hash = password::hash_password(&payload.password)?;
    let user = User::new(
        payload.username,
        payload.email,
        payload.full_name,
        password_hash,
        DEFAULT_ROLE.to_string(),
    );

    // Unique-constraint violations surface as 409 via the sqlx mapping.
    let created = UserRepository::new().create(&state.pool, &user).await?;
    tracing::info!(user_id = %created.id, username = %created.username, "Registered user");

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LoginResponse>, AppError> {
    LOGIN_RULES.validate(&body)?;
    let payload: LoginPayload = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let user = UserRepository::new()
        .find_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = jwt::create_access_token(
        user.id.to_string(),
        user.username.clone(),
        user.role.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid username or password".to_string())
}
