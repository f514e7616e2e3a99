//! User routes.

use axum::{extract::State, Json};
use domain::models::{NewUser, User};

use crate::app::AppState;
use crate::error::ApiError;

/// Create a user.
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<NewUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.create(request).await?;
    Ok(Json(user))
}

/// List all users.
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list().await?))
}
