use crate::domain::{
    errors::PredictionError,
    logging::{LogComponent, get_logger},
};
use crate::log_debug;
use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::pin;

pub mod dto;
pub mod prediction_client;

pub use prediction_client::PredictionClient;

/// JSON-over-HTTP client on top of gloo for WASM.
#[derive(Clone, Debug)]
pub struct GlooHttpClient {
    default_headers: Vec<(String, String)>,
    timeout_ms: Option<u32>,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooHttpClient {
    pub fn new() -> Self {
        Self {
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
            timeout_ms: None,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: Option<u32>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Non-2xx responses become [`PredictionError::Http`], carrying the
    /// service's `{"error": ...}` message when the body has one.
    pub async fn get_json<T>(&self, url: &str) -> Result<T, PredictionError>
    where
        T: DeserializeOwned,
    {
        let body = with_timeout(self.get_text(url), self.timeout_ms).await?;
        decode_json(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, PredictionError> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PredictionError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PredictionError::Network(format!("Failed to read response: {}", e)))?;

        if !HttpUtils::is_success_status(status) {
            return Err(status_error(status, &text, response.status_text()));
        }

        log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET response: {} bytes", text.len());

        Ok(text)
    }
}

/// Error for a non-2xx reply: the service's `{"error": ...}` message when
/// present, the HTTP status text otherwise.
pub fn status_error(status: u16, body: &str, status_text: String) -> PredictionError {
    let message = dto::ServiceErrorDto::message_from(body).unwrap_or(status_text);
    get_logger().error(
        LogComponent::Infrastructure("HTTP"),
        &format!("HTTP error: {} - {}", status, message),
    );
    PredictionError::Http { status, message }
}

/// Decode a JSON body, mapping serde failures to [`PredictionError::Decode`].
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, PredictionError> {
    serde_json::from_str(body).map_err(|e| PredictionError::Decode(e.to_string()))
}

/// Race `fut` against a timer when a timeout is configured.
pub async fn with_timeout<T, F>(fut: F, timeout_ms: Option<u32>) -> Result<T, PredictionError>
where
    F: Future<Output = Result<T, PredictionError>>,
{
    let Some(ms) = timeout_ms else {
        return fut.await;
    };
    let fut = pin!(fut);
    let timer = pin!(TimeoutFuture::new(ms));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            get_logger().warn(
                LogComponent::Infrastructure("HTTP"),
                &format!("⏱️ Request abandoned after {} ms", ms),
            );
            Err(PredictionError::Timeout(ms))
        }
    }
}

pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Append `params` as a query string, keeping their order.
    pub fn build_url_with_params(base_url: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string = params
            .iter()
            .map(|(key, value)| format!("{}={}", Self::url_encode(key), Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set.
    pub fn url_encode(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }
}
