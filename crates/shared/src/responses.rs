//! Response bodies returned by the game API
//!
//! The server is not fully consistent in how it spells fields: login uses
//! camelCase while inventory items use snake_case, and user ids arrive as JSON
//! numbers. Decoding accepts both spellings and both id representations.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use gamevault_domain::{CurrentUser, InventoryItem, ItemProperty, ItemType, Session};

// =============================================================================
// Login
// =============================================================================

/// Body of a `POST {base}/login` response
///
/// A failed login may carry nothing but `error`, so every field is optional
/// and `success` defaults to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginResponse {
    /// Build the session described by a successful response
    ///
    /// Returns `None` unless `success` is set and the token, user id and
    /// username are all present.
    pub fn session(&self) -> Option<Session> {
        if !self.success {
            return None;
        }
        let token = self.access_token.clone()?;
        let user = CurrentUser::new(self.user_id.clone()?, self.username.clone()?);
        Some(Session::new(token, user))
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// One item as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemData {
    #[serde(rename = "item_name", alias = "itemName")]
    pub item_name: String,
    #[serde(rename = "item_type", alias = "itemType")]
    pub item_type: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl InventoryItemData {
    /// Convert into the domain item, flattening property values to text
    pub fn into_domain(self) -> InventoryItem {
        let properties = self
            .properties
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| ItemProperty::new(key, property_text(value)))
            .collect();

        InventoryItem {
            item_name: self.item_name,
            item_type: ItemType::from(self.item_type),
            quantity: self.quantity,
            properties,
        }
    }
}

/// Body of a successful `GET {base}/inventory` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<InventoryItemData>>,
}

impl InventoryResponse {
    /// The item list in server order; empty when the field is absent
    pub fn into_items(self) -> Vec<InventoryItem> {
        self.inventory
            .unwrap_or_default()
            .into_iter()
            .map(InventoryItemData::into_domain)
            .collect()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body the server sends with non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Helpers
// =============================================================================

fn property_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}
