//! Inventory grid and item detail view models

use std::fmt;

use gamevault_domain::{humanize_key, InventoryItem, ItemType};

/// Shown in place of the grid when the player owns nothing
pub const EMPTY_INVENTORY_MESSAGE: &str = "Your inventory is empty";

const DEFAULT_ICON: &str = "📦";

/// Icon for an item type; unknown types share a default icon
pub fn item_icon(item_type: &ItemType) -> &'static str {
    match item_type {
        ItemType::Weapon => "⚔️",
        ItemType::Armor => "🛡️",
        ItemType::Consumable => "🧪",
        ItemType::Special => "✨",
        ItemType::Other(_) => DEFAULT_ICON,
    }
}

/// Quantity with the multiplication marker, e.g. `×5`
pub fn format_quantity(quantity: u32) -> String {
    format!("×{}", quantity)
}

/// One `Label: value` row of an item's properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
    pub label: String,
    pub value: String,
}

impl fmt::Display for PropertyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Property rows in server order, with humanized labels
pub fn property_lines(item: &InventoryItem) -> Vec<PropertyLine> {
    item.properties
        .iter()
        .map(|property| PropertyLine {
            label: humanize_key(&property.key),
            value: property.value.clone(),
        })
        .collect()
}

/// An item as shown in the inventory grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub icon: &'static str,
    pub name: String,
    pub type_badge: String,
    pub quantity_label: String,
    pub properties: Vec<PropertyLine>,
}

impl ItemCard {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            icon: item_icon(&item.item_type),
            name: item.item_name.clone(),
            type_badge: item.item_type.to_string(),
            quantity_label: format_quantity(item.quantity),
            properties: property_lines(item),
        }
    }
}

/// Grid content: either the empty-state message or one card per item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryBody {
    Empty(String),
    Items(Vec<ItemCard>),
}

/// The rendered inventory panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    /// e.g. `3 items`
    pub count_label: String,
    pub body: InventoryBody,
}

impl InventoryView {
    pub fn item_count(&self) -> usize {
        match &self.body {
            InventoryBody::Empty(_) => 0,
            InventoryBody::Items(cards) => cards.len(),
        }
    }
}

pub fn render_inventory(items: &[InventoryItem]) -> InventoryView {
    if items.is_empty() {
        return InventoryView {
            count_label: "0 items".to_string(),
            body: InventoryBody::Empty(EMPTY_INVENTORY_MESSAGE.to_string()),
        };
    }

    InventoryView {
        count_label: format!("{} items", items.len()),
        body: InventoryBody::Items(items.iter().map(ItemCard::from_item).collect()),
    }
}

/// Content of the item detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetailsView {
    pub icon: &'static str,
    pub name: String,
    pub type_badge: String,
    /// e.g. `Quantity: ×5`
    pub quantity_label: String,
    /// Empty when the item has no properties; the section is then omitted
    pub properties: Vec<PropertyLine>,
}

pub fn render_item_details(item: &InventoryItem) -> ItemDetailsView {
    ItemDetailsView {
        icon: item_icon(&item.item_type),
        name: item.item_name.clone(),
        type_badge: item.item_type.to_string(),
        quantity_label: format!("Quantity: {}", format_quantity(item.quantity)),
        properties: property_lines(item),
    }
}
