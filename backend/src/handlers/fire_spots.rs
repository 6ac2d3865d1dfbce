//! HTTP handlers for fire spot markers

use axum::{extract::State, Json};

use shared::types::FetchState;

use crate::error::{AppError, AppResult};
use crate::models::FireSpotMarker;
use crate::AppState;

/// List marker descriptors from the mount-time fire spot fetch.
///
/// An unresolved provider yields an empty list (the dashboard is still
/// loading); a failed provider surfaces its message as a fetch error.
pub async fn list_fire_spot_markers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FireSpotMarker>>> {
    let dashboard = state.dashboard.read().await;
    match dashboard.fire_spots() {
        FetchState::Success { data } => Ok(Json(data.iter().map(FireSpotMarker::from).collect())),
        FetchState::Failed { message } => Err(AppError::Fetch(message.clone())),
        FetchState::Idle | FetchState::Loading => Ok(Json(Vec::new())),
    }
}
