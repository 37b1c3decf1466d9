#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use taskboard_backend::{
    app::build_app, config::Config, db::connection::create_lazy_pool, state::AppState,
    utils::jwt,
};
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

/// App wired to a lazy pool: routing, validation and middleware behave
/// normally, while no database connection is ever established. Tests here
/// only exercise paths that fail before any query runs.
pub fn test_app() -> Router {
    let config = Config {
        database_url: "postgres://localhost:1/taskboard_unreachable".into(),
        jwt_secret: TEST_SECRET.into(),
        jwt_expiration_hours: 1,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    };
    let pool = create_lazy_pool(&config.database_url).expect("lazy pool");
    build_app(AppState::new(pool, config))
}

pub fn token_for(role: &str) -> String {
    jwt::create_access_token(
        Uuid::new_v4().to_string(),
        "test-user".into(),
        role.into(),
        TEST_SECRET,
        1,
    )
    .expect("create token")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request")
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
