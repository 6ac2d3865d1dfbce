//! WebAssembly module for the FireWatch dashboard
//!
//! Provides client-side computation for:
//! - Wildfire risk classification (banner recomputes without a round-trip)
//! - Marker styling tiers
//! - Offline validation of provider payloads

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Classify wildfire risk from temperature (°C) and humidity (%)
#[wasm_bindgen]
pub fn classify_wildfire_risk(temperature: f64, humidity: f64) -> String {
    format!("{}", classify(temperature, humidity))
}

/// Raw risk score: 1.5 * temperature - 0.5 * humidity
#[wasm_bindgen]
pub fn wildfire_risk_score(temperature: f64, humidity: f64) -> f64 {
    risk_score(temperature, humidity)
}

/// Styling tier for the risk banner derived from current conditions
#[wasm_bindgen]
pub fn risk_banner_class(temperature: f64, humidity: f64) -> String {
    classify(temperature, humidity).color_class().to_string()
}

/// Check a coordinate pair before sending a camera event upstream
#[wasm_bindgen]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    is_valid_latitude(latitude) && is_valid_longitude(longitude)
}

/// Check whether a humidity value is a physical percentage.
/// Synthesized forecast samples may legitimately fall outside it.
#[wasm_bindgen]
pub fn humidity_in_physical_range(humidity: f64) -> bool {
    is_physical_humidity(humidity)
}

/// Validate a forecast series payload (24 samples, ordered hour labels)
#[wasm_bindgen]
pub fn validate_forecast_payload(samples_json: &str) -> bool {
    let samples: Vec<ForecastSample> = match serde_json::from_str(samples_json) {
        Ok(samples) => samples,
        Err(_) => return false,
    };
    validate_forecast_series(&samples).is_ok()
}

/// Validate a fire spot payload (unique marker ids)
#[wasm_bindgen]
pub fn validate_fire_spot_payload(spots_json: &str) -> bool {
    let spots: Vec<FireSpot> = match serde_json::from_str(spots_json) {
        Ok(spots) => spots,
        Err(_) => return false,
    };
    validate_fire_spots(&spots).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_wildfire_risk() {
        assert_eq!(classify_wildfire_risk(50.0, 0.0), "High");
        assert_eq!(classify_wildfire_risk(40.0, 10.0), "Medium");
        assert_eq!(classify_wildfire_risk(20.0, 20.0), "Low");
        assert_eq!(classify_wildfire_risk(25.0, 60.0), "Low");
    }

    #[test]
    fn test_risk_banner_class() {
        assert_eq!(risk_banner_class(25.0, 60.0), "risk-low");
        assert_eq!(risk_banner_class(50.0, 0.0), "risk-high");
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(34.05, -118.24));
        assert!(!validate_coordinates(95.0, 0.0));
        assert!(!validate_coordinates(0.0, 200.0));
    }

    #[test]
    fn test_validate_forecast_payload() {
        let samples: Vec<ForecastSample> = (0..24)
            .map(|hour| ForecastSample {
                time_label: hour_label(hour),
                temperature: 22.0,
                humidity: 55.0,
            })
            .collect();
        let json = serde_json::to_string(&samples).unwrap();
        assert!(validate_forecast_payload(&json));

        assert!(!validate_forecast_payload("[]"));
        assert!(!validate_forecast_payload("not json"));
    }

    #[test]
    fn test_validate_fire_spot_payload() {
        let json = r#"[
            {"id": 1, "latitude": "34.05", "longitude": "-118.24", "risk": "high"},
            {"id": 2, "latitude": "33.68", "longitude": "-117.83", "risk": "low"}
        ]"#;
        assert!(validate_fire_spot_payload(json));

        let duplicate = r#"[
            {"id": 1, "latitude": "34.05", "longitude": "-118.24", "risk": "high"},
            {"id": 1, "latitude": "33.68", "longitude": "-117.83", "risk": "low"}
        ]"#;
        assert!(!validate_fire_spot_payload(duplicate));
    }
}
