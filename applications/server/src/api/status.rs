/// Status echo route
use axum::{extract::Path, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status_code: i32,
    pub message: String,
}

/// GET /api/status/:code
/// Echoes the code in the body; the HTTP status itself is always 200
pub async fn status(Path(code): Path<i32>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status_code: code,
        message: "Status response for CI/CD testing".to_string(),
    })
}
