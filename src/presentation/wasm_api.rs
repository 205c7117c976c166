use js_sys::{Array, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::config::ClientConfig;
use crate::domain::{
    chart::ChartService,
    logging::{LogComponent, get_logger},
    prediction::{Asset, all_assets},
};
use crate::infrastructure::http::PredictionClient;

/// JavaScript entry point for fetching predictions without the Leptos UI.
#[wasm_bindgen]
pub struct PredictionApi {
    client: PredictionClient,
}

#[wasm_bindgen]
impl PredictionApi {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        let config = match base_url {
            Some(url) => ClientConfig::default().with_base_url(url),
            None => ClientConfig::default(),
        };
        Self { client: PredictionClient::new(&config) }
    }

    /// Supported asset identifiers in picker order.
    pub fn assets(&self) -> Array {
        all_assets().into_iter().map(|a| JsValue::from_str(a.id())).collect()
    }

    /// Resolve to `{ labels, datasets }` chart data for `coin`, or reject
    /// with an error message.
    pub fn predict(&self, coin: String) -> Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            let asset: Asset = coin
                .parse()
                .map_err(|_| JsValue::from_str(&format!("Unknown asset: {}", coin)))?;

            let prediction = client.get_prediction(asset).await.map_err(|e| {
                get_logger().error(LogComponent::Presentation("PredictionApi"), &e.to_string());
                JsValue::from_str(&e.to_string())
            })?;

            let json = serde_json::to_string(&ChartService::line_chart(&prediction))
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            js_sys::JSON::parse(&json)
        })
    }
}
