//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint. Single
//! attempt per call: no retry, no backoff, no cache.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use shared::models::WeatherReading;
use shared::types::GpsCoordinates;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather.
///
/// Only the fields the dashboard consumes are modeled; a payload missing any
/// of them fails deserialization and surfaces as a fetch error rather than
/// propagating an implicit shape.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    wind: OwmWind,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Build a client from the resolved application configuration
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.api_endpoint.clone())
    }

    /// Fetch current weather conditions by GPS coordinates.
    ///
    /// Coordinates are passed through unvalidated; an out-of-range query is
    /// the upstream service's to reject.
    pub async fn fetch_current(&self, coordinates: &GpsCoordinates) -> AppResult<WeatherReading> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, coordinates.latitude, coordinates.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Fetch(format!("Weather API request failed: {}", e)))?;

        Self::parse_current(&body)
    }

    /// Parse and convert an OpenWeatherMap current-weather payload.
    pub fn parse_current(body: &[u8]) -> AppResult<WeatherReading> {
        let data: OwmCurrentResponse = serde_json::from_slice(body)
            .map_err(|e| AppError::Fetch(format!("Failed to parse weather response: {}", e)))?;

        Ok(WeatherReading {
            temperature: data.main.temp,
            humidity: data.main.humidity,
            wind_speed: data.wind.speed,
            observed_at: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        })
    }
}
