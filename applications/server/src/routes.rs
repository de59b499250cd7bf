/// HTTP routing
use crate::{api, state::AppState};
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Endpoint table logged at startup
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET  /", "Homepage"),
    ("GET  /actuator/health", "Health check"),
    ("GET  /api/version", "Running version"),
    ("GET  /api/users", "List users"),
    ("GET  /api/users/:id", "User details"),
    ("GET  /api/users/search", "Search by email or role"),
    ("GET  /api/calculate/:a/:b", "Calculator demo"),
    ("GET  /api/status/:code", "Status echo"),
];

/// Build the full application router
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/version", get(api::version::get_version))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users/search", get(api::users::search_users))
        .route("/users/:id", get(api::users::get_user))
        // Demo endpoints
        .route("/calculate/:a/:b", get(api::calculate::calculate))
        .route("/status/:code", get(api::status::status));

    Router::new()
        .route("/", get(api::home::home))
        .route("/actuator/health", get(api::health::health))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
