//! Forecast synthesizer tests
//!
//! Structural properties of the synthetic hourly series: sample count, label
//! order, jitter bounds, seeded reproducibility, and the preserved
//! no-clamping quirk.

use chrono::Utc;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use firewatch_backend::services::synthesize_hourly;
use shared::models::{hour_label, WeatherReading, FORECAST_HOURS};
use shared::validation::validate_forecast_series;

fn reading(temperature: f64, humidity: f64) -> WeatherReading {
    WeatherReading {
        temperature,
        humidity,
        wind_speed: 3.2,
        observed_at: Utc::now(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_series_has_24_hourly_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = synthesize_hourly(&reading(25.0, 60.0), &mut rng);

        assert_eq!(samples.len(), FORECAST_HOURS);
        assert!(validate_forecast_series(&samples).is_ok());
    }

    #[test]
    fn test_labels_run_in_hour_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = synthesize_hourly(&reading(25.0, 60.0), &mut rng);

        assert_eq!(samples[0].time_label, "0:00");
        assert_eq!(samples[12].time_label, "12:00");
        assert_eq!(samples[23].time_label, "23:00");
        for (hour, sample) in samples.iter().enumerate() {
            assert_eq!(sample.time_label, hour_label(hour));
        }
    }

    #[test]
    fn test_jitter_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = reading(25.0, 60.0);
        let samples = synthesize_hourly(&source, &mut rng);

        for sample in &samples {
            assert!((sample.temperature - source.temperature).abs() <= 2.5);
            assert!((sample.humidity - source.humidity).abs() <= 5.0);
        }
    }

    /// Same seed, same series: the random source is injectable
    #[test]
    fn test_seeded_runs_reproduce() {
        let source = reading(18.0, 45.0);

        let a = synthesize_hourly(&source, &mut StdRng::seed_from_u64(99));
        let b = synthesize_hourly(&source, &mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }

    /// Humidity is not clamped into [0, 100]
    #[test]
    fn test_humidity_left_unclamped() {
        // A reading already above the physical range stays above it:
        // every sample is at least 110 - 5.
        let mut rng = StdRng::seed_from_u64(3);
        let high = synthesize_hourly(&reading(25.0, 110.0), &mut rng);
        assert!(high.iter().all(|s| s.humidity > 100.0));

        // Symmetrically below zero
        let mut rng = StdRng::seed_from_u64(3);
        let low = synthesize_hourly(&reading(25.0, -10.0), &mut rng);
        assert!(low.iter().all(|s| s.humidity < 0.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Structural contract holds for any reading and any seed
        #[test]
        fn prop_series_structure(
            temp in -50.0..60.0f64,
            humidity in 0.0..=100.0f64,
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let samples = synthesize_hourly(&reading(temp, humidity), &mut rng);

            prop_assert_eq!(samples.len(), FORECAST_HOURS);
            prop_assert!(validate_forecast_series(&samples).is_ok());
        }

        /// Jitter never exceeds its half-widths
        #[test]
        fn prop_jitter_bounded(
            temp in -50.0..60.0f64,
            humidity in 0.0..=100.0f64,
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let source = reading(temp, humidity);
            let samples = synthesize_hourly(&source, &mut rng);

            for sample in &samples {
                prop_assert!((sample.temperature - source.temperature).abs() <= 2.5);
                prop_assert!((sample.humidity - source.humidity).abs() <= 5.0);
            }
        }
    }
}
