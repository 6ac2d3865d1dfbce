//! HTTP handlers for the FireWatch dashboard

pub mod dashboard;
pub mod fire_spots;
pub mod health;
pub mod map_config;
pub mod weather;

pub use dashboard::*;
pub use fire_spots::*;
pub use health::*;
pub use map_config::*;
pub use weather::*;
