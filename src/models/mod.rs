//! Core data models for gold medal metrics.

mod country;
mod medal;
mod stats;

pub use country::*;
pub use medal::*;
pub use stats::*;
