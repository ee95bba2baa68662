//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

pub fn http_error(status: u16, message: Option<&str>) -> ApiError {
    ApiError::HttpError {
        status,
        message: message.map(str::to_string),
    }
}

/// Inventory body holding a single sword
pub fn sword_inventory_json() -> Value {
    json!({
        "inventory": [
            {"itemName": "Sword", "itemType": "weapon", "quantity": 1, "properties": {"damage": "10"}}
        ]
    })
}
