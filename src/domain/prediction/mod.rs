//! Prediction aggregate: the asset being forecast, the validated forecast
//! and the port used to obtain one.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
