//! Router assembly.

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, entities::crud_routes};
use crate::middleware::{self, RoleGate};
use crate::models::{
    custom_field::CustomField, label::Label, priority::Priority, project::Project,
    recurring::RecurringRule, reminder::Reminder, status::Status, tag::Tag,
};
use crate::state::AppState;

pub fn build_app(state: AppState) -> Router {
    // Public routes (no auth)
    let public_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login));

    // Authenticated routes
    let user_routes = Router::new()
        .nest("/api/custom-fields", crud_routes::<CustomField>())
        .nest("/api/labels", crud_routes::<Label>())
        .nest("/api/priorities", crud_routes::<Priority>())
        .nest("/api/statuses", crud_routes::<Status>())
        .nest("/api/tags", crud_routes::<Tag>())
        .nest("/api/recurring", crud_routes::<RecurringRule>())
        .nest("/api/reminders", crud_routes::<Reminder>())
        .nest("/api/projects", crud_routes::<Project>())
        .route(
            "/api/assignees",
            post(handlers::assignees::create_assignee).get(handlers::assignees::list_assignees),
        )
        .route(
            "/api/assignees/{id}",
            put(handlers::assignees::update_assignee)
                .delete(handlers::assignees::delete_assignee),
        )
        .route(
            "/api/notifications",
            post(handlers::notifications::create_notification)
                .get(handlers::notifications::list_my_notifications),
        )
        .route(
            "/api/notifications/{id}/seen",
            put(handlers::notifications::mark_notification_seen),
        )
        .route("/api/metrics", get(handlers::metrics::get_my_metrics))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    // Admin routes (auth + role gate)
    let admin_routes = Router::new()
        .route("/api/users", get(handlers::users::list_users))
        .route("/api/users/{id}", delete(handlers::users::delete_user))
        .route_layer(axum_middleware::from_fn_with_state(
            RoleGate::allow(["admin"]),
            middleware::require_role,
        ))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}
