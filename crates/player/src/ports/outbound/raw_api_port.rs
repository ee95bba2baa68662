//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` moves JSON values over HTTP and nothing more, so it can be
//! stored behind `Arc<dyn ...>`. The application layer provides the typed
//! wrapper (`application::api::Api`) on top.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// `GET url` with an `Authorization: Bearer <token>` header
    async fn get_json_authorized(&self, url: &str, bearer_token: &str)
        -> Result<Value, ApiError>;

    /// `POST url` with a JSON body
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}
