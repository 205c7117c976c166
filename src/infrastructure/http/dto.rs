//! Wire shapes of the prediction service.

use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::ValidationError,
    prediction::{Asset, Prediction},
};

/// Body of a successful `/predict` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponseDto {
    pub dates: Vec<String>,
    pub predicted: Vec<f64>,
}

impl PredictionResponseDto {
    pub fn into_domain(self, asset: Asset) -> Result<Prediction, ValidationError> {
        Prediction::try_new(asset, self.dates, self.predicted)
    }
}

/// Body the service sends alongside 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceErrorDto {
    pub error: String,
}

impl ServiceErrorDto {
    /// The `error` field of `body`, if it has that shape.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body).ok().map(|dto| dto.error)
    }
}
