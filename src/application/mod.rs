pub mod controller;

pub use controller::{PredictionController, StateCell};
