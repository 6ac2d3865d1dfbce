//! Domain models for the FireWatch dashboard

mod fire_spot;
mod forecast;
mod risk;
mod viewpoint;
mod weather;

pub use fire_spot::*;
pub use forecast::*;
pub use risk::*;
pub use viewpoint::*;
pub use weather::*;
