//! HTTP adapter for the game API (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use gamevault_shared::ErrorResponse;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// `RawApiPort` implementation over a shared reqwest client
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiAdapter {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

/// Decode a response: JSON body on success, `HttpError` otherwise
///
/// Error bodies are parsed leniently; a body that is not `{"error": ...}`
/// simply yields no message.
async fn read_json(response: Response) -> Result<Value, ApiError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|parsed| parsed.error);

    tracing::debug!(status = status.as_u16(), ?message, "Game API returned an error status");

    Err(ApiError::HttpError {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json_authorized(
        &self,
        url: &str,
        bearer_token: &str,
    ) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(bearer_token)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        read_json(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        read_json(response).await
    }
}
