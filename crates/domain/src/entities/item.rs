//! Inventory item entity - an item owned by the authenticated player
//!
//! Items are immutable values fetched wholesale on every inventory load.
//! They carry no identity across loads: a refresh replaces the whole list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an inventory item
///
/// The server sends the type as a free-form lowercase string. The four known
/// categories get dedicated variants; anything else is kept verbatim in
/// `Other` so the raw value can still be shown on the type badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Special,
    Other(String),
}

impl ItemType {
    /// The wire/badge name of this type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Consumable => "consumable",
            Self::Special => "special",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ItemType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "weapon" => Self::Weapon,
            "armor" => Self::Armor,
            "consumable" => Self::Consumable,
            "special" => Self::Special,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for ItemType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single key/value property of an item, e.g. `damage: 10`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperty {
    pub key: String,
    pub value: String,
}

impl ItemProperty {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An item in the player's inventory
///
/// Simple data struct: every combination of field values is valid. Properties
/// keep the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub item_name: String,
    pub item_type: ItemType,
    pub quantity: u32,
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
}

impl InventoryItem {
    pub fn new(item_name: impl Into<String>, item_type: ItemType, quantity: u32) -> Self {
        Self {
            item_name: item_name.into(),
            item_type,
            quantity,
            properties: Vec::new(),
        }
    }

    /// Builder-style helper to append a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(ItemProperty::new(key, value));
        self
    }
}
