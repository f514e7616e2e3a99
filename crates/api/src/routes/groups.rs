//! Group routes.

use axum::{extract::State, Json};
use domain::models::{Group, NewGroup};

use crate::app::AppState;
use crate::error::ApiError;

/// Create a group.
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<NewGroup>,
) -> Result<Json<Group>, ApiError> {
    let group = state.groups.create(request).await?;
    Ok(Json(group))
}

/// List all groups.
///
/// GET /groups
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<Vec<Group>>, ApiError> {
    Ok(Json(state.groups.list().await?))
}
