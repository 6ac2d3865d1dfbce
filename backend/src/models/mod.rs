//! Domain models for the FireWatch dashboard
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
