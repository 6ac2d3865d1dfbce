//! Dashboard aggregation state
//!
//! Owns the ViewPoint, the per-provider fetch states, and the weather-fetch
//! generation counter, and composes the snapshot the frontend renders.
//!
//! Superseded weather fetches are not aborted; each fetch carries the
//! generation current when it started, and a response whose generation is
//! stale is discarded instead of overwriting newer state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use shared::models::{
    classify, FireSpot, FireSpotMarker, ForecastSample, RiskLevel, ViewPoint, WeatherReading,
};
use shared::types::FetchState;
use shared::validation::validate_fire_spots;

use crate::external::WeatherClient;
use crate::services::fire_spots::FireSpotSource;
use crate::services::forecast::synthesize_hourly;
use crate::AppState;

/// Mutable dashboard state: one instance per dashboard, no sharing across
/// concurrent dashboards.
#[derive(Debug)]
pub struct DashboardState {
    view_point: ViewPoint,
    generation: u64,
    weather: FetchState<WeatherReading>,
    forecast: Vec<ForecastSample>,
    fire_spots: FetchState<Vec<FireSpot>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            view_point: ViewPoint::default(),
            generation: 0,
            weather: FetchState::Idle,
            forecast: Vec::new(),
            fire_spots: FetchState::Idle,
        }
    }

    pub fn view_point(&self) -> &ViewPoint {
        &self.view_point
    }

    pub fn weather(&self) -> &FetchState<WeatherReading> {
        &self.weather
    }

    pub fn fire_spots(&self) -> &FetchState<Vec<FireSpot>> {
        &self.fire_spots
    }

    /// Apply a camera-change event.
    ///
    /// Invalidates the active reading and its forecast, moves the weather
    /// machine to `Loading`, and returns the generation that the resulting
    /// fetch must carry.
    pub fn set_view_point(&mut self, view_point: ViewPoint) -> u64 {
        self.view_point = view_point;
        self.weather = FetchState::Loading;
        self.forecast.clear();
        self.generation += 1;
        self.generation
    }

    /// Apply the outcome of a weather fetch started under `generation`.
    ///
    /// Returns false when the response is stale (a newer ViewPoint change
    /// already superseded it) and was discarded.
    pub fn apply_weather(
        &mut self,
        generation: u64,
        outcome: Result<(WeatherReading, Vec<ForecastSample>), String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match outcome {
            Ok((reading, forecast)) => {
                self.weather = FetchState::Success { data: reading };
                self.forecast = forecast;
            }
            Err(message) => {
                self.weather = FetchState::Failed { message };
                self.forecast.clear();
            }
        }
        true
    }

    /// Mark the one-shot fire spot fetch as in flight.
    pub fn begin_fire_spot_fetch(&mut self) {
        self.fire_spots = FetchState::Loading;
    }

    /// Apply the outcome of the fire spot fetch.
    pub fn apply_fire_spots(&mut self, outcome: Result<Vec<FireSpot>, String>) {
        self.fire_spots = match outcome {
            Ok(spots) => FetchState::Success { data: spots },
            Err(message) => FetchState::Failed { message },
        };
    }

    /// Compose the render-ready dashboard snapshot.
    ///
    /// The risk level is derived from the active reading at composition
    /// time, never stored, so it cannot go stale relative to the reading
    /// it was computed from. A failed provider surfaces its message
    /// verbatim and suppresses the metric payload: the frontend shows the
    /// error full-screen, no partial UI.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let loading = self.weather.is_pending() || self.fire_spots.is_pending();
        let error = self
            .weather
            .failure()
            .or_else(|| self.fire_spots.failure())
            .map(String::from);

        let (risk, forecast, markers) = if error.is_some() {
            (None, Vec::new(), Vec::new())
        } else {
            let risk = self
                .weather
                .success()
                .map(|reading| classify(reading.temperature, reading.humidity));
            let markers = self
                .fire_spots
                .success()
                .map(|spots| spots.iter().map(FireSpotMarker::from).collect())
                .unwrap_or_default();
            (risk, self.forecast.clone(), markers)
        };

        DashboardSnapshot {
            view_point: self.view_point.clone(),
            loading,
            error,
            weather: self.weather.clone(),
            risk,
            risk_color_class: risk.map(|r| r.color_class().to_string()),
            forecast,
            markers,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the View Composer renders: camera state, provider states, the
/// derived risk classification, the forecast series, and marker descriptors.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub view_point: ViewPoint,
    /// True until both providers have resolved
    pub loading: bool,
    /// First provider failure, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub weather: FetchState<WeatherReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_color_class: Option<String>,
    pub forecast: Vec<ForecastSample>,
    pub markers: Vec<FireSpotMarker>,
}

/// Orchestrates provider fetches against the shared dashboard state.
#[derive(Clone)]
pub struct DashboardService {
    state: Arc<RwLock<DashboardState>>,
    weather: WeatherClient,
    fire_spots: Arc<dyn FireSpotSource>,
}

impl DashboardService {
    pub fn new(
        state: Arc<RwLock<DashboardState>>,
        weather: WeatherClient,
        fire_spots: Arc<dyn FireSpotSource>,
    ) -> Self {
        Self {
            state,
            weather,
            fire_spots,
        }
    }

    pub fn from_app_state(app: &AppState) -> Self {
        Self::new(
            app.dashboard.clone(),
            app.weather.clone(),
            app.fire_spots.clone(),
        )
    }

    /// Current render-ready snapshot.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.snapshot()
    }

    /// Handle a camera-change event: invalidate the active reading and kick
    /// off a generation-guarded weather fetch for the new coordinate.
    ///
    /// The fetch runs detached; the returned snapshot is typically still
    /// `Loading`. The lock is never held across the fetch await.
    pub async fn update_view_point(&self, view_point: ViewPoint) -> DashboardSnapshot {
        let (generation, coordinates) = {
            let mut state = self.state.write().await;
            let generation = state.set_view_point(view_point);
            (generation, state.view_point().coordinates.clone())
        };

        let state = self.state.clone();
        let client = self.weather.clone();
        tokio::spawn(async move {
            let outcome = match client.fetch_current(&coordinates).await {
                Ok(reading) => {
                    let forecast = synthesize_hourly(&reading, &mut rand::thread_rng());
                    Ok((reading, forecast))
                }
                Err(e) => Err(e.to_string()),
            };

            let applied = state.write().await.apply_weather(generation, outcome);
            if !applied {
                tracing::debug!(generation, "discarded stale weather response");
            }
        });

        self.snapshot().await
    }

    /// One-shot fire spot load at dashboard mount. Failures land in the
    /// provider's fetch state rather than propagating.
    pub async fn load_fire_spots(&self) {
        {
            self.state.write().await.begin_fire_spot_fetch();
        }

        let outcome = match self.fire_spots.fetch_fire_spots().await {
            Ok(spots) => validate_fire_spots(&spots)
                .map(|_| spots)
                .map_err(|message| message.to_string()),
            Err(e) => Err(e.to_string()),
        };

        if let Err(ref message) = outcome {
            tracing::warn!("fire spot fetch failed: {}", message);
        }
        self.state.write().await.apply_fire_spots(outcome);
    }
}
