/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use roster_server::{config::ServerConfig, routes::create_router, state::AppState, VersionInfo};
use tower::util::ServiceExt;

/// Router over the seed directory with fixed version metadata
pub fn create_test_app() -> Router {
    create_router(AppState::seeded(fixtures::version_info()))
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}

/// Test fixtures
pub mod fixtures {
    use super::*;

    pub const TEST_VERSION: &str = "9.9.9-test";
    pub const TEST_COMMIT: &str = "deadbeef";
    pub const TEST_BRANCH: &str = "feature/roster";

    pub fn version_info() -> VersionInfo {
        let mut config = ServerConfig::default();
        config.app.version = Some(TEST_VERSION.to_string());
        config.app.profile = Some("test".to_string());
        config.git.commit = Some(TEST_COMMIT.to_string());
        config.git.branch = Some(TEST_BRANCH.to_string());
        config.build.timestamp = Some("1700000000000".to_string());

        VersionInfo::resolve_with(&config, |_| None)
    }
}
