//! UI Port - rendering instructions pushed to the front end
//!
//! The session client never draws anything itself. Each state change is
//! described as a `UiUpdate` and handed to whatever front end is attached
//! (terminal shell, recording fake in tests, ...).

use gamevault_domain::{ClientSettings, InventoryStats, Tab};

use crate::ui::presentation::{InventoryView, ItemDetailsView, PlayerInfoView};

/// A single rendering instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Switch to the login view
    ShowLoginScreen,
    /// Switch to the authenticated view and show the player's identity
    ShowGameScreen(PlayerInfoView),
    /// Show an error below the login form
    ShowLoginError(String),
    HideLoginError,
    /// Populate the login form fields
    FillLoginForm { username: String, password: String },
    /// Empty the login form fields and hide any login error
    ClearLoginForm,
    /// Replace the inventory grid with a loading indicator
    InventoryLoading,
    /// Replace the inventory grid with a message (load failure)
    InventoryMessage(String),
    RenderInventory(InventoryView),
    UpdateStats(InventoryStats),
    ShowItemDetails(ItemDetailsView),
    CloseItemDetails,
    ActivateTab(Tab),
    /// Reflect the current settings in the settings controls
    SettingsLoaded(ClientSettings),
    /// A confirmation the user has to acknowledge
    Acknowledge(String),
}

/// Front end receiving rendering instructions
pub trait UiPort: Send + Sync {
    fn apply(&self, update: UiUpdate);
}
