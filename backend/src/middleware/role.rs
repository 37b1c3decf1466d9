use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, middleware::auth::AuthUser};

/// Role allow-list applied after authentication.
///
/// An empty allow-list means "any role", but it still requires an identity
/// on the request: open to any role is not open to anonymous. Failures are
/// a uniform 403 "Forbidden" with no hint of which check tripped.
#[derive(Debug, Clone, Default)]
pub struct RoleGate {
    allowed: Vec<String>,
}

impl RoleGate {
    /// Gate restricted to the given roles.
    pub fn allow<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Gate that accepts any authenticated caller.
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    fn permits(&self, role: &str) -> bool {
        self.allowed.is_empty() || self.allowed.iter().any(|allowed| allowed == role)
    }
}

pub async fn require_role(
    State(gate): State<RoleGate>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(forbidden)?;

    if !gate.permits(&user.role) {
        return Err(forbidden());
    }

    Ok(next.run(request).await)
}

fn forbidden() -> AppError {
    AppError::Forbidden("Forbidden".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body, http::StatusCode, middleware::from_fn_with_state, routing::get, Router,
    };
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(gate: RoleGate) -> Router {
        Router::new()
            .route("/guarded", get(|| async { "ok" }))
            .layer(from_fn_with_state(gate, require_role))
    }

    fn request_as(role: Option<&str>) -> axum::http::Request<Body> {
        let builder = axum::http::Request::builder().uri("/guarded");
        let builder = match role {
            Some(role) => builder.extension(AuthUser {
                id: Uuid::new_v4(),
                username: "alice".into(),
                role: role.into(),
            }),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    async fn body_message(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_identity_is_forbidden_even_with_empty_allow_list() {
        let response = app(RoleGate::any_authenticated())
            .oneshot(request_as(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_message(response).await["message"], "Forbidden");
    }

    #[tokio::test]
    async fn missing_identity_is_forbidden_with_admin_allow_list() {
        let response = app(RoleGate::allow(["admin"]))
            .oneshot(request_as(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn empty_allow_list_passes_any_role() {
        let response = app(RoleGate::any_authenticated())
            .oneshot(request_as(Some("guest")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn role_outside_allow_list_is_forbidden() {
        let response = app(RoleGate::allow(["admin"]))
            .oneshot(request_as(Some("member")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_message(response).await["message"], "Forbidden");
    }

    #[tokio::test]
    async fn listed_role_passes() {
        let response = app(RoleGate::allow(["admin", "owner"]))
            .oneshot(request_as(Some("owner")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
