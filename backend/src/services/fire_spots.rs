//! Fire spot marker provider
//!
//! Supplies the set of known risk markers rendered on the map. The current
//! implementation is a static simulated payload; real deployments swap in a
//! live feed behind the same trait. Implementations must keep ids unique and
//! stable across refreshes so frontend marker keys do not churn.

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::models::{FireSpot, RiskLevel};

use crate::error::AppResult;

/// A source of fire spot markers, fetched once at dashboard mount.
#[async_trait]
pub trait FireSpotSource: Send + Sync {
    async fn fetch_fire_spots(&self) -> AppResult<Vec<FireSpot>>;
}

/// Simulated fire spots across the southern California fire region.
#[derive(Debug, Default)]
pub struct StaticFireSpots;

#[async_trait]
impl FireSpotSource for StaticFireSpots {
    async fn fetch_fire_spots(&self) -> AppResult<Vec<FireSpot>> {
        Ok(vec![
            spot(1, "34.0522", "-118.2437", RiskLevel::High),
            spot(2, "34.4208", "-119.6982", RiskLevel::Medium),
            spot(3, "34.1083", "-117.2898", RiskLevel::High),
            spot(4, "33.6846", "-117.8265", RiskLevel::Low),
            spot(5, "34.2746", "-118.5489", RiskLevel::Medium),
            spot(6, "33.9533", "-117.3962", RiskLevel::Low),
        ])
    }
}

fn spot(id: u32, latitude: &str, longitude: &str, risk: RiskLevel) -> FireSpot {
    FireSpot {
        id,
        latitude: latitude.parse::<Decimal>().unwrap_or_default(),
        longitude: longitude.parse::<Decimal>().unwrap_or_default(),
        risk,
    }
}
