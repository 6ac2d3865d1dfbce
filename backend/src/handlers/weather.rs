//! HTTP handlers for direct weather point queries

use axum::{
    extract::{Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::types::GpsCoordinates;

use crate::error::AppResult;
use crate::models::{ForecastSample, WeatherReading};
use crate::services::WeatherService;
use crate::AppState;

/// Query parameters for a weather point query
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Fetch current weather for a coordinate, bypassing dashboard state
pub async fn fetch_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<WeatherReading>> {
    let service = WeatherService::new(state.weather.clone());
    let coordinates = GpsCoordinates::new(query.latitude, query.longitude);
    let reading = service.fetch_current(&coordinates).await?;
    Ok(Json(reading))
}

/// Current reading plus its synthesized hourly series
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub reading: WeatherReading,
    pub samples: Vec<ForecastSample>,
}

/// Fetch current weather and synthesize the 24-hour forecast series
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ForecastResponse>> {
    let service = WeatherService::new(state.weather.clone());
    let coordinates = GpsCoordinates::new(query.latitude, query.longitude);
    let mut rng = StdRng::from_entropy();
    let (reading, samples) = service
        .fetch_with_forecast(&coordinates, &mut rng)
        .await?;
    Ok(Json(ForecastResponse { reading, samples }))
}
