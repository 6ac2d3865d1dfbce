//! Weather client payload tests
//!
//! The fetch boundary models the upstream payload as a validated structural
//! type: required fields missing means a typed fetch failure, not an
//! implicit shape leaking into the core.

use firewatch_backend::error::AppError;
use firewatch_backend::external::WeatherClient;

#[test]
fn test_parse_valid_payload() {
    // Trimmed OpenWeatherMap current-weather response; unmodeled fields are
    // ignored by the boundary type
    let body = br#"{
        "coord": {"lon": -118.24, "lat": 34.05},
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "main": {"temp": 25.0, "feels_like": 26.1, "pressure": 1014, "humidity": 60},
        "wind": {"speed": 4.1, "deg": 250},
        "dt": 1700000000,
        "name": "Los Angeles"
    }"#;

    let reading = WeatherClient::parse_current(body).unwrap();
    assert_eq!(reading.temperature, 25.0);
    assert_eq!(reading.humidity, 60.0);
    assert_eq!(reading.wind_speed, 4.1);
    assert_eq!(reading.observed_at.timestamp(), 1700000000);
}

#[test]
fn test_missing_temperature_is_fetch_failure() {
    let body = br#"{
        "main": {"humidity": 60},
        "wind": {"speed": 4.1},
        "dt": 1700000000
    }"#;

    let err = WeatherClient::parse_current(body).unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
    assert!(err.to_string().contains("Failed to parse weather response"));
}

#[test]
fn test_missing_wind_block_is_fetch_failure() {
    let body = br#"{
        "main": {"temp": 25.0, "humidity": 60},
        "dt": 1700000000
    }"#;

    assert!(WeatherClient::parse_current(body).is_err());
}

#[test]
fn test_malformed_body_is_fetch_failure() {
    let err = WeatherClient::parse_current(b"<html>rate limited</html>").unwrap_err();
    assert!(matches!(err, AppError::Fetch(_)));
}

#[test]
fn test_integer_metrics_parse_as_floats() {
    // Upstream serializes whole-number readings without a decimal point
    let body = br#"{
        "main": {"temp": 31, "humidity": 18},
        "wind": {"speed": 7},
        "dt": 1700003600
    }"#;

    let reading = WeatherClient::parse_current(body).unwrap();
    assert_eq!(reading.temperature, 31.0);
    assert_eq!(reading.humidity, 18.0);
    assert_eq!(reading.wind_speed, 7.0);
}
