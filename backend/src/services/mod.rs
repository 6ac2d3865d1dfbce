//! Business logic services for the FireWatch dashboard

pub mod dashboard;
pub mod fire_spots;
pub mod forecast;
pub mod weather;

pub use dashboard::{DashboardService, DashboardSnapshot, DashboardState};
pub use fire_spots::{FireSpotSource, StaticFireSpots};
pub use forecast::synthesize_hourly;
pub use weather::WeatherService;
