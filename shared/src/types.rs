//! Common types used across the dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Lifecycle of an asynchronous provider fetch.
///
/// Both dashboard providers (weather, fire spots) move through the same
/// machine: `Idle -> Loading -> Success | Failed`. A `Failed` state carries
/// the upstream message verbatim; the frontend shows it full-screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success { data: T },
    Failed { message: String },
}

impl<T> FetchState<T> {
    /// True until the fetch has resolved either way.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The successful payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            FetchState::Success { data } => Some(data),
            _ => None,
        }
    }

    /// The failure message, if the fetch failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}
