//! Validation utilities for the FireWatch dashboard
//!
//! The core deliberately does not validate query coordinates (out-of-range
//! values pass through to the upstream weather service); these helpers guard
//! the seams that do carry contracts: marker identity and forecast shape.

use crate::models::{FireSpot, ForecastSample, FORECAST_HOURS};

// ============================================================================
// Fire Spot Validations
// ============================================================================

/// Validate that every fire spot id in the collection is unique.
///
/// Marker rendering keys are derived from `id`; a duplicate would make the
/// frontend drop or double-draw markers.
pub fn validate_fire_spots(spots: &[FireSpot]) -> Result<(), &'static str> {
    let mut seen = std::collections::HashSet::with_capacity(spots.len());
    for spot in spots {
        if !seen.insert(spot.id) {
            return Err("Fire spot ids must be unique");
        }
    }
    Ok(())
}

// ============================================================================
// Forecast Validations
// ============================================================================

/// Validate the structural contract of a synthesized forecast series:
/// exactly 24 samples, hour labels "0:00" through "23:00" in order.
pub fn validate_forecast_series(samples: &[ForecastSample]) -> Result<(), &'static str> {
    if samples.len() != FORECAST_HOURS {
        return Err("Forecast series must contain exactly 24 samples");
    }
    for (hour, sample) in samples.iter().enumerate() {
        if sample.time_label != crate::models::hour_label(hour) {
            return Err("Forecast hour labels must run 0:00 through 23:00 in order");
        }
    }
    Ok(())
}

// ============================================================================
// Coordinate Helpers
// ============================================================================

/// Check that a latitude is within [-90, 90].
///
/// Advisory only: providers pass out-of-range values through to upstream.
pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

/// Check that a longitude is within [-180, 180].
pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}

/// Check that a humidity value is a physical percentage.
///
/// Synthesized forecast samples may legitimately fail this check: the
/// synthesizer does not clamp its jitter into [0, 100].
pub fn is_physical_humidity(humidity: f64) -> bool {
    (0.0..=100.0).contains(&humidity)
}
