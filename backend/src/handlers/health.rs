//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use shared::types::FetchState;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub weather_provider: &'static str,
    pub fire_spot_provider: &'static str,
}

fn provider_status<T>(state: &FetchState<T>) -> &'static str {
    match state {
        FetchState::Idle => "idle",
        FetchState::Loading => "loading",
        FetchState::Success { .. } => "ready",
        FetchState::Failed { .. } => "failed",
    }
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let dashboard = state.dashboard.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather_provider: provider_status(dashboard.weather()),
        fire_spot_provider: provider_status(dashboard.fire_spots()),
    })
}
