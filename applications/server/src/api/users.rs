/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{User, UserId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// GET /api/users
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    Json(app_state.directory.list_all())
}

/// GET /api/users/:id
pub async fn get_user(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state.directory.get_by_id(UserId::new(id))?;
    Ok(Json(user))
}

/// GET /api/users/search?email=... or ?role=...
///
/// Email lookups return a single user (404 when absent); role lookups
/// return a possibly empty array.
pub async fn search_users(
    State(app_state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<Response> {
    match (query.email, query.role) {
        (Some(email), None) => {
            let user = app_state
                .directory
                .find_by_email(&email)
                .ok_or_else(|| ServerError::NotFound(format!("User not found: {}", email)))?;
            Ok(Json(user).into_response())
        }
        (None, Some(role)) => {
            let users = app_state.directory.find_by_role(&role);
            Ok(Json(users).into_response())
        }
        (Some(_), Some(_)) => Err(ServerError::BadRequest(
            "Specify either email or role, not both".to_string(),
        )),
        (None, None) => Err(ServerError::BadRequest(
            "Missing search parameter: email or role".to_string(),
        )),
    }
}
