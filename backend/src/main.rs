//! FireWatch server binary
//!
//! Boots the dashboard backend: loads configuration, seeds the dashboard
//! state, kicks off the initial provider fetches, and serves the API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firewatch_backend::services::{DashboardService, StaticFireSpots};
use firewatch_backend::{config::Config, create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firewatch_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FireWatch Dashboard Server");
    tracing::info!("Environment: {}", config.environment);

    let port = config.server.port;
    let state = AppState::new(config, Arc::new(StaticFireSpots::default()));

    // Mount-time fetches: fire spots once, weather for the initial camera.
    // Both run concurrently; the snapshot reports loading until they land.
    let dashboard = DashboardService::from_app_state(&state);
    dashboard.load_fire_spots().await;
    let initial = { state.dashboard.read().await.view_point().clone() };
    dashboard.update_view_point(initial).await;

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
