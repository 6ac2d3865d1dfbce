//! Route definitions for the FireWatch dashboard

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard snapshot and camera events
        .nest("/dashboard", dashboard_routes())
        // Direct weather point queries
        .nest("/weather", weather_routes())
        // Fire spot markers
        .nest("/firespots", fire_spot_routes())
        // Frontend configuration
        .nest("/config", config_routes())
}

/// Dashboard state routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/viewpoint", put(handlers::update_view_point))
}

/// Weather point query routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::fetch_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}

/// Fire spot marker routes
fn fire_spot_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::list_fire_spot_markers))
}

/// Frontend configuration routes
fn config_routes() -> Router<AppState> {
    Router::new().route("/map", get(handlers::get_map_config))
}
