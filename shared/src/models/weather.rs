//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at a single queried point.
///
/// Immutable once received; a new fetch supersedes (never merges with) the
/// previous reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent, [0, 100] as reported upstream
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Upstream observation timestamp
    pub observed_at: DateTime<Utc>,
}
