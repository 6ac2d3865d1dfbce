//! HTTP handlers for the dashboard snapshot and camera events

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::ViewPoint;
use crate::services::{DashboardService, DashboardSnapshot};
use crate::AppState;

/// Get the current dashboard snapshot
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    let service = DashboardService::from_app_state(&state);
    Json(service.snapshot().await)
}

/// Camera-change event from the map collaborator
#[derive(Debug, Deserialize)]
pub struct ViewPointInput {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub zoom_level: f64,
}

/// Update the ViewPoint and trigger the weather re-fetch.
///
/// The returned snapshot is typically still loading; the frontend polls
/// `GET /dashboard` for the resolved state.
pub async fn update_view_point(
    State(state): State<AppState>,
    Json(input): Json<ViewPointInput>,
) -> Json<DashboardSnapshot> {
    let service = DashboardService::from_app_state(&state);
    let view_point = ViewPoint::new(input.latitude, input.longitude, input.zoom_level);
    Json(service.update_view_point(view_point).await)
}
