//! UI action dispatch
//!
//! Every user interaction the front end can produce is a [`UiAction`];
//! [`dispatch`] routes each variant to exactly one `SessionClient` handler.

use gamevault_domain::Tab;

use crate::application::session_client::SessionClient;

/// Preset accounts matching the server's seeded players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoAccount {
    Player1,
    Player2,
}

impl DemoAccount {
    /// `(username, password)` for this preset
    pub fn credentials(self) -> (&'static str, &'static str) {
        match self {
            Self::Player1 => ("player1", "password123"),
            Self::Player2 => ("player2", "password456"),
        }
    }
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SubmitLogin { username: String, password: String },
    DemoLogin(DemoAccount),
    Logout,
    Refresh,
    SwitchTab(Tab),
    /// Click on the item card at this position in the inventory
    SelectItem(usize),
    CloseItemDetails,
    ClickOutsideDetails,
    ToggleAutoRefresh(bool),
    SaveSettings {
        api_base_url: String,
        auto_refresh_enabled: bool,
    },
    AutoRefreshTick,
}

pub async fn dispatch(client: &SessionClient, action: UiAction) {
    match action {
        UiAction::SubmitLogin { username, password } => client.login(&username, &password).await,
        UiAction::DemoLogin(account) => client.demo_login(account).await,
        UiAction::Logout => client.logout(),
        UiAction::Refresh => client.load_inventory().await,
        UiAction::SwitchTab(tab) => client.switch_tab(tab).await,
        UiAction::SelectItem(index) => client.show_item_details(index),
        UiAction::CloseItemDetails | UiAction::ClickOutsideDetails => {
            client.close_item_details()
        }
        UiAction::ToggleAutoRefresh(enabled) => client.set_auto_refresh(enabled),
        UiAction::SaveSettings {
            api_base_url,
            auto_refresh_enabled,
        } => client.save_settings(&api_base_url, auto_refresh_enabled),
        UiAction::AutoRefreshTick => {
            client.auto_refresh_tick().await;
        }
    }
}
