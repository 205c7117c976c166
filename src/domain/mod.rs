//! Domain layer: pure types and rules with no browser dependencies.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod prediction;
pub mod state;
