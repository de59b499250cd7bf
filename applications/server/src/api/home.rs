/// Homepage route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

pub const APPLICATION_NAME: &str = "Roster Demo";
pub const REPOSITORY_URL: &str = "https://github.com/rumos/workshop-cicd";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub message: String,
    pub application: String,
    pub version: String,
    pub environment: String,
    pub git_commit: String,
    pub build_timestamp: String,
    pub status: String,
    pub repository: String,
}

/// GET /
pub async fn home(State(app_state): State<AppState>) -> Json<HomeResponse> {
    let version = &app_state.version;

    Json(HomeResponse {
        message: "Welcome to the Roster demo service!".to_string(),
        application: APPLICATION_NAME.to_string(),
        version: version.version.clone(),
        environment: version.environment.clone(),
        git_commit: version.git_commit.clone(),
        build_timestamp: version.build_timestamp.clone(),
        status: "running".to_string(),
        repository: REPOSITORY_URL.to_string(),
    })
}
