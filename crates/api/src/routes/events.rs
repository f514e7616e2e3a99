//! Event routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::{Event, NewEvent};

use crate::app::AppState;
use crate::error::ApiError;

/// Create a standalone event.
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.events.create(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// Create an event in an existing group.
///
/// POST /events/group/:group_id
///
/// Responds 404 when the group does not exist; nothing is written.
pub async fn create_event_for_group(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
    Json(request): Json<NewEvent>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.events.create_for_group(group_id, request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// List all events with their groups.
///
/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    Ok(Json(state.events.list().await?))
}
