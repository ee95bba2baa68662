//! Presentation layer - pure functions from client state to view models
//!
//! Nothing here performs I/O or touches the session; the same inventory
//! always renders to the same view.

pub mod inventory_view;
pub mod player_info;

pub use inventory_view::{
    format_quantity, item_icon, property_lines, render_inventory, render_item_details,
    InventoryBody, InventoryView, ItemCard, ItemDetailsView, PropertyLine,
    EMPTY_INVENTORY_MESSAGE,
};
pub use player_info::PlayerInfoView;
