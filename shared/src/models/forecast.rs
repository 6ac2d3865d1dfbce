//! Synthetic hourly forecast models

use serde::{Deserialize, Serialize};

/// Number of samples in a synthesized forecast series, one per hour.
pub const FORECAST_HOURS: usize = 24;

/// A single hour of the synthesized forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    /// Hour label, `"0:00"` through `"23:00"`
    pub time_label: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Label for a forecast hour: `0 -> "0:00"`, `23 -> "23:00"`.
pub fn hour_label(hour: usize) -> String {
    format!("{}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0), "0:00");
        assert_eq!(hour_label(9), "9:00");
        assert_eq!(hour_label(23), "23:00");
    }
}
