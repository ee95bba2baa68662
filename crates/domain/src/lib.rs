//! Game Vault domain types.
//!
//! Pure value types shared by the player client: the authenticated session,
//! client settings, inventory items and the statistics derived from them.
//! Nothing in this crate performs I/O.

pub mod common;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use common::humanize_key;
pub use entities::{InventoryItem, ItemProperty, ItemType};
pub use error::DomainError;
pub use value_objects::{
    parse_flag, ClientSettings, CurrentUser, InventoryStats, Session, Tab, DEFAULT_API_URL,
};
