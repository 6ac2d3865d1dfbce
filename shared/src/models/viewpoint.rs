//! Map camera state

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// The currently selected map coordinate and zoom driving the weather query.
///
/// Mutated only by camera-change events from the map collaborator; every
/// mutation invalidates the active weather reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewPoint {
    pub coordinates: GpsCoordinates,
    pub zoom_level: f64,
}

impl ViewPoint {
    pub fn new(latitude: Decimal, longitude: Decimal, zoom_level: f64) -> Self {
        Self {
            coordinates: GpsCoordinates::new(latitude, longitude),
            zoom_level,
        }
    }
}

impl Default for ViewPoint {
    /// Initial camera over the southern California fire region.
    fn default() -> Self {
        Self::new(
            Decimal::new(340522, 4),
            Decimal::new(-1182437, 4),
            6.0,
        )
    }
}
