use std::future::Future;

use super::{entities::Prediction, value_objects::Asset};
use crate::domain::errors::PredictionError;

/// Anything able to produce a validated prediction for an asset.
///
/// Implementations run on the browser event loop, so the returned future is
/// not required to be `Send`.
pub trait PredictionSource {
    fn fetch_prediction(&self, asset: Asset) -> impl Future<Output = Result<Prediction, PredictionError>>;
}
