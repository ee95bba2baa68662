//! Typed API wrapper for the session client.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and turns the two game endpoints into
//! typed calls via serde_json conversions. Endpoint URLs are passed in per
//! call because the base URL is a user setting that can change at runtime.

use std::sync::Arc;

use gamevault_shared::{InventoryResponse, LoginRequest, LoginResponse};

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    /// `POST {url}` with the credentials
    pub async fn login(&self, url: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body =
            serde_json::to_value(request).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(url, &body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// `GET {url}` authorized with the access token
    pub async fn fetch_inventory(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<InventoryResponse, ApiError> {
        let value = self.raw.get_json_authorized(url, access_token).await?;
        serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_sends_credentials_as_json() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|url, body| {
                url == "http://localhost:8080/api/login"
                    && body == &json!({"username": "demo", "password": "demo123"})
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({"success": true, "accessToken": "tok1", "userId": "42", "username": "demo"}))
            });

        let api = Api::new(Arc::new(raw));
        let response = api
            .login(
                "http://localhost:8080/api/login",
                &LoginRequest::new("demo", "demo123"),
            )
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.access_token.as_deref(), Some("tok1"));
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json_authorized()
            .returning(|_, _| Ok(json!({"inventory": "not a list"})));

        let api = Api::new(Arc::new(raw));
        let err = api
            .fetch_inventory("http://localhost:8080/api/inventory", "tok1")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_port_errors_pass_through() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json_authorized()
            .withf(|_, token| token == "tok1")
            .returning(|_, _| {
                Err(ApiError::HttpError {
                    status: 401,
                    message: None,
                })
            });

        let api = Api::new(Arc::new(raw));
        let err = api
            .fetch_inventory("http://localhost:8080/api/inventory", "tok1")
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
    }
}
