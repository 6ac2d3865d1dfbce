//! Weather service for point queries outside the dashboard state
//!
//! Thin orchestration over the API client: the raw-fetch endpoints use it to
//! serve a single reading (or reading plus synthesized forecast) without
//! touching the dashboard's fetch state.

use rand::Rng;
use shared::models::{ForecastSample, WeatherReading};
use shared::types::GpsCoordinates;

use crate::error::AppResult;
use crate::external::WeatherClient;
use crate::services::forecast::synthesize_hourly;

/// Weather service for direct point queries
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch the current reading for a coordinate. Single attempt, no retry.
    pub async fn fetch_current(&self, coordinates: &GpsCoordinates) -> AppResult<WeatherReading> {
        self.client.fetch_current(coordinates).await
    }

    /// Fetch the current reading and synthesize its hourly forecast series.
    pub async fn fetch_with_forecast<R: Rng + ?Sized>(
        &self,
        coordinates: &GpsCoordinates,
        rng: &mut R,
    ) -> AppResult<(WeatherReading, Vec<ForecastSample>)> {
        let reading = self.client.fetch_current(coordinates).await?;
        let forecast = synthesize_hourly(&reading, rng);
        Ok((reading, forecast))
    }
}
