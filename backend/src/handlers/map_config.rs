//! HTTP handler for frontend map configuration

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Map collaborator configuration handed to the frontend
#[derive(Debug, Serialize)]
pub struct MapConfigResponse {
    pub access_token: String,
}

/// Get the map-service access token
pub async fn get_map_config(State(state): State<AppState>) -> AppResult<Json<MapConfigResponse>> {
    let access_token = state.config.map.access_token.clone();
    if access_token.is_empty() {
        return Err(AppError::Configuration(
            "Map access token not configured".to_string(),
        ));
    }

    Ok(Json(MapConfigResponse { access_token }))
}
