//! Wildfire risk classification

use serde::{Deserialize, Serialize};

/// Ordinal wildfire risk classification: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// CSS styling tier the frontend applies to banners and map markers.
    pub fn color_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Raw risk score: `1.5 * temperature - 0.5 * humidity`.
pub fn risk_score(temperature: f64, humidity: f64) -> f64 {
    1.5 * temperature - 0.5 * humidity
}

/// Classify wildfire risk from a temperature (°C) and relative humidity (%).
///
/// Total over all f64 inputs; boundary scores belong to the lower class
/// (exactly 60 is Medium, exactly 40 is Low). NaN comparisons are false,
/// so NaN input lands in `Low`.
pub fn classify(temperature: f64, humidity: f64) -> RiskLevel {
    let score = risk_score(temperature, humidity);
    if score > 60.0 {
        RiskLevel::High
    } else if score > 40.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        // score = 55
        assert_eq!(classify(40.0, 10.0), RiskLevel::Medium);
        // score = 75
        assert_eq!(classify(50.0, 0.0), RiskLevel::High);
        // score = 20
        assert_eq!(classify(20.0, 20.0), RiskLevel::Low);
        // score = 7.5
        assert_eq!(classify(25.0, 60.0), RiskLevel::Low);
    }

    #[test]
    fn test_classify_boundaries_fall_to_lower_class() {
        // score exactly 60
        assert_eq!(classify(40.0, 0.0), RiskLevel::Medium);
        // score exactly 40
        assert_eq!(classify(30.0, 10.0), RiskLevel::Low);
        // just above each threshold
        assert_eq!(classify(40.1, 0.0), RiskLevel::High);
        assert_eq!(classify(30.0, 9.9), RiskLevel::Medium);
    }

    #[test]
    fn test_classify_accepts_nonsense_inputs() {
        // Negative and out-of-physical-range inputs still classify
        assert_eq!(classify(-40.0, 120.0), RiskLevel::Low);
        assert_eq!(classify(100.0, -50.0), RiskLevel::High);
        // NaN comparisons are false on both thresholds
        assert_eq!(classify(f64::NAN, 50.0), RiskLevel::Low);
        assert_eq!(classify(25.0, f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_order() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_color_classes() {
        assert_eq!(RiskLevel::Low.color_class(), "risk-low");
        assert_eq!(RiskLevel::Medium.color_class(), "risk-medium");
        assert_eq!(RiskLevel::High.color_class(), "risk-high");
    }
}
