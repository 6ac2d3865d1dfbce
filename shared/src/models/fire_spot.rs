//! Fire spot marker models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// A known or reported wildfire risk location.
///
/// Identity is `id`; ids must stay stable across provider refreshes so the
/// frontend's marker rendering keys do not churn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FireSpot {
    pub id: u32,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub risk: RiskLevel,
}

/// Marker descriptor handed to the map collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FireSpotMarker {
    pub id: u32,
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Styling tier derived from the spot's risk level
    pub color_class: String,
}

impl From<&FireSpot> for FireSpotMarker {
    fn from(spot: &FireSpot) -> Self {
        Self {
            id: spot.id,
            latitude: spot.latitude,
            longitude: spot.longitude,
            color_class: spot.risk.color_class().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_marker_derives_color_class() {
        let spot = FireSpot {
            id: 3,
            latitude: Decimal::from_str("-33.8688").unwrap(),
            longitude: Decimal::from_str("151.2093").unwrap(),
            risk: RiskLevel::High,
        };

        let marker = FireSpotMarker::from(&spot);
        assert_eq!(marker.id, 3);
        assert_eq!(marker.color_class, "risk-high");
    }
}
