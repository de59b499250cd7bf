/// Version API route
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub version: String,
    pub environment: String,
    pub git_commit: String,
    pub git_branch: String,
}

/// GET /api/version
/// Reports which build is running where
pub async fn get_version(State(app_state): State<AppState>) -> Json<VersionResponse> {
    let info = &app_state.version;

    Json(VersionResponse {
        version: info.version.clone(),
        environment: info.environment.clone(),
        git_commit: info.git_commit.clone(),
        git_branch: info.git_branch.clone(),
    })
}
