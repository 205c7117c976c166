use std::future::Future;

use super::{GlooHttpClient, HttpUtils, dto::PredictionResponseDto};
use crate::config::ClientConfig;
use crate::domain::{
    errors::PredictionError,
    logging::{LogComponent, get_logger},
    prediction::{Asset, Prediction, PredictionSource},
};

/// REST client for the `/predict` endpoint.
#[derive(Clone, Debug)]
pub struct PredictionClient {
    base_url: String,
    http: GlooHttpClient,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: GlooHttpClient::new().with_timeout(config.timeout_ms),
        }
    }

    pub fn prediction_url(&self, asset: Asset) -> String {
        HttpUtils::build_url_with_params(&format!("{}/predict", self.base_url), &[("coin", asset.id())])
    }

    pub async fn get_prediction(&self, asset: Asset) -> Result<Prediction, PredictionError> {
        let url = self.prediction_url(asset);
        get_logger().info(
            LogComponent::Infrastructure("PredictionAPI"),
            &format!("📈 Requesting prediction from: {url}"),
        );

        let dto: PredictionResponseDto = self.http.get_json(&url).await?;
        let prediction = dto.into_domain(asset)?;

        get_logger().info(
            LogComponent::Infrastructure("PredictionAPI"),
            &format!("✅ Loaded {} predicted points for {}", prediction.len(), asset),
        );

        Ok(prediction)
    }
}

impl PredictionSource for PredictionClient {
    fn fetch_prediction(&self, asset: Asset) -> impl Future<Output = Result<Prediction, PredictionError>> {
        self.get_prediction(asset)
    }
}
