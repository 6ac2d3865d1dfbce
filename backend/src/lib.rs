//! FireWatch Dashboard - Backend Server
//!
//! Server-side core of a browser-rendered wildfire-risk dashboard: weather
//! and fire-spot providers, risk classification, synthetic forecasts, and
//! the aggregation state the frontend renders.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::WeatherClient;
use services::{DashboardState, FireSpotSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub fire_spots: Arc<dyn FireSpotSource>,
    pub dashboard: Arc<RwLock<DashboardState>>,
}

impl AppState {
    pub fn new(config: Config, fire_spots: Arc<dyn FireSpotSource>) -> Self {
        let weather = WeatherClient::from_config(&config.weather);
        Self {
            config: Arc::new(config),
            weather,
            fire_spots,
            dashboard: Arc::new(RwLock::new(DashboardState::new())),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FireWatch Dashboard API v1.0"
}
