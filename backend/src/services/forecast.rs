//! Synthetic hourly forecast generation
//!
//! Placeholder for a real forecast API: the series is derived from the
//! current reading by jittering each hour around it. Callers inject the
//! random source so tests can seed it.

use rand::Rng;
use shared::models::{hour_label, ForecastSample, WeatherReading, FORECAST_HOURS};

/// Temperature jitter half-width in °C
const TEMPERATURE_JITTER: f64 = 2.5;
/// Humidity jitter half-width in percentage points
const HUMIDITY_JITTER: f64 = 5.0;

/// Synthesize a 24-sample hourly series from the current reading.
///
/// Deliberately stochastic: regenerated (with fresh jitter) every time the
/// underlying reading changes. Humidity is not clamped into [0, 100], so
/// samples near the edges of the physical range can leave it.
pub fn synthesize_hourly<R: Rng + ?Sized>(
    reading: &WeatherReading,
    rng: &mut R,
) -> Vec<ForecastSample> {
    (0..FORECAST_HOURS)
        .map(|hour| ForecastSample {
            time_label: hour_label(hour),
            temperature: reading.temperature
                + rng.gen_range(-TEMPERATURE_JITTER..=TEMPERATURE_JITTER),
            humidity: reading.humidity + rng.gen_range(-HUMIDITY_JITTER..=HUMIDITY_JITTER),
        })
        .collect()
}
