//! Domain entities

mod item;

pub use item::{InventoryItem, ItemProperty, ItemType};
