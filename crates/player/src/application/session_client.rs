//! Session client
//!
//! `SessionClient` owns the session, the loaded inventory, the settings and
//! the view state (active tab, open item). UI actions call into it; it talks
//! to the game API through [`Api`], persists through [`SessionStore`] and
//! describes every visible change as a [`UiUpdate`].
//!
//! All state sits behind one mutex. The guard is never held across an
//! `.await`, so a handler's network call never blocks other handlers and
//! every completion applies its result in a single critical section.
//!
//! Overlapping calls resolve as last-write-wins, with one exception: an
//! inventory completion whose access token is no longer the current one is
//! dropped, so a slow response cannot resurrect a session that was logged
//! out (or replaced) while it was in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gamevault_domain::{ClientSettings, InventoryItem, InventoryStats, Session, Tab};
use gamevault_shared::LoginRequest;

use crate::application::api::Api;
use crate::application::dispatch::DemoAccount;
use crate::application::services::SessionStore;
use crate::ports::outbound::{ApiError, UiPort, UiUpdate};
use crate::state::{Platform, PlatformStorageAdapter};
use crate::ui::presentation::{render_inventory, render_item_details, PlayerInfoView};

/// User-facing messages
pub mod messages {
    pub const LOGIN_FAILED: &str = "Login failed";
    pub const CONNECTION_FAILED: &str =
        "Failed to connect to server. Please check if the API server is running.";
    pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";
    pub const INVENTORY_LOADING: &str = "Loading inventory...";
    pub const INVENTORY_LOAD_FAILED: &str = "Failed to load inventory. Please try again.";
    pub const SETTINGS_SAVED: &str = "Settings saved!";
}

#[derive(Debug, Default)]
struct ClientState {
    settings: ClientSettings,
    session: Session,
    inventory: Vec<InventoryItem>,
    active_tab: Tab,
    open_item: Option<usize>,
}

impl ClientState {
    fn holds_token(&self, token: &str) -> bool {
        self.session.access_token.as_deref() == Some(token)
    }
}

/// Stateful facade between the UI and the game API
///
/// Clones share the same state; a running client has exactly one state.
#[derive(Clone)]
pub struct SessionClient {
    api: Api,
    store: SessionStore<PlatformStorageAdapter>,
    ui: Arc<dyn UiPort>,
    state: Arc<Mutex<ClientState>>,
}

impl SessionClient {
    /// Build a client. `defaults` fill in whatever settings were never saved.
    pub fn new(
        api: Api,
        platform: &Platform,
        ui: Arc<dyn UiPort>,
        defaults: ClientSettings,
    ) -> Self {
        let state = ClientState {
            settings: defaults,
            ..ClientState::default()
        };

        Self {
            api,
            store: SessionStore::new(platform.storage_adapter()),
            ui,
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn endpoint(&self, path: &str) -> String {
        self.lock().settings.endpoint(path)
    }

    /// Restore persisted settings and session, then pick the starting view
    pub async fn initialize(&self) {
        let defaults = self.lock().settings.clone();
        let settings = self.store.load_settings(&defaults);
        let session = self.store.load_session();

        let resumed = session
            .is_authenticated()
            .then(|| session.user.clone())
            .flatten();

        {
            let mut state = self.lock();
            state.settings = settings.clone();
            state.session = session;
        }
        self.ui.apply(UiUpdate::SettingsLoaded(settings));

        match resumed {
            Some(user) => {
                tracing::info!(username = %user.username, "Resuming persisted session");
                self.ui
                    .apply(UiUpdate::ShowGameScreen(PlayerInfoView::from_user(&user)));
                self.load_inventory().await;
            }
            None => {
                tracing::debug!("No persisted session");
                self.ui.apply(UiUpdate::ShowLoginScreen);
            }
        }
    }

    /// Authenticate and, on success, move to the game view
    pub async fn login(&self, username: &str, password: &str) {
        self.ui.apply(UiUpdate::HideLoginError);

        let url = self.endpoint("login");
        let request = LoginRequest::new(username, password);
        tracing::info!(username, "Logging in");

        match self.api.login(&url, &request).await {
            Ok(response) => match response.session() {
                Some(session) => self.complete_login(session).await,
                None => {
                    tracing::info!(username, "Login rejected by server");
                    let message = response
                        .error
                        .unwrap_or_else(|| messages::LOGIN_FAILED.to_string());
                    self.ui.apply(UiUpdate::ShowLoginError(message));
                }
            },
            Err(e @ ApiError::HttpError { .. }) => {
                tracing::info!(username, error = %e, "Login rejected");
                let message = e.server_message().unwrap_or(messages::LOGIN_FAILED);
                self.ui.apply(UiUpdate::ShowLoginError(message.to_string()));
            }
            Err(e) => {
                tracing::error!("Login request failed: {}", e);
                self.ui
                    .apply(UiUpdate::ShowLoginError(messages::CONNECTION_FAILED.to_string()));
            }
        }
    }

    /// Fill the login form with a preset account and submit it
    pub async fn demo_login(&self, account: DemoAccount) {
        let (username, password) = account.credentials();
        self.ui.apply(UiUpdate::FillLoginForm {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.login(username, password).await;
    }

    async fn complete_login(&self, session: Session) {
        let player = session.user.as_ref().map(PlayerInfoView::from_user);

        self.lock().session = session.clone();
        self.store.save_session(&session);
        tracing::info!("Login successful");

        if let Some(player) = player {
            self.ui.apply(UiUpdate::ShowGameScreen(player));
        }
        self.load_inventory().await;
    }

    /// Drop the session everywhere and return to the login view
    pub fn logout(&self) {
        let had_open_item = {
            let mut state = self.lock();
            state.session.clear();
            state.inventory.clear();
            state.open_item.take().is_some()
        };
        self.store.clear_session();
        tracing::info!("Logged out");

        if had_open_item {
            self.ui.apply(UiUpdate::CloseItemDetails);
        }
        self.ui.apply(UiUpdate::ShowLoginScreen);
        self.ui.apply(UiUpdate::ClearLoginForm);
    }

    /// Fetch the inventory with the current token and render it
    pub async fn load_inventory(&self) {
        let (token, url) = {
            let state = self.lock();
            (
                state.session.access_token.clone(),
                state.settings.endpoint("inventory"),
            )
        };

        let Some(token) = token else {
            tracing::debug!("No access token, showing login");
            self.ui.apply(UiUpdate::ShowLoginScreen);
            return;
        };

        self.ui.apply(UiUpdate::InventoryLoading);

        match self.api.fetch_inventory(&url, &token).await {
            Ok(response) => self.apply_inventory(&token, response.into_items()),
            Err(e) if e.is_unauthorized() => self.expire_session(&token),
            Err(e) => {
                tracing::warn!("Failed to load inventory: {}", e);
                let current = self.lock().holds_token(&token);
                if current {
                    self.ui.apply(UiUpdate::InventoryMessage(
                        messages::INVENTORY_LOAD_FAILED.to_string(),
                    ));
                }
            }
        }
    }

    fn apply_inventory(&self, token: &str, items: Vec<InventoryItem>) {
        let (view, stats) = {
            let mut state = self.lock();
            if !state.holds_token(token) {
                tracing::debug!("Dropping inventory fetched with a superseded token");
                return;
            }
            state.inventory = items;
            (
                render_inventory(&state.inventory),
                InventoryStats::from_items(&state.inventory),
            )
        };

        tracing::debug!(items = view.item_count(), "Inventory loaded");
        self.ui.apply(UiUpdate::RenderInventory(view));
        self.ui.apply(UiUpdate::UpdateStats(stats));
    }

    fn expire_session(&self, token: &str) {
        let current = self.lock().holds_token(token);
        if !current {
            tracing::debug!("Ignoring 401 for a superseded token");
            return;
        }

        tracing::warn!("Session expired");
        self.logout();
        // After logout, which clears the login form and its error
        self.ui
            .apply(UiUpdate::ShowLoginError(messages::SESSION_EXPIRED.to_string()));
    }

    /// Make `tab` the visible panel; the inventory tab reloads
    pub async fn switch_tab(&self, tab: Tab) {
        self.lock().active_tab = tab;
        self.ui.apply(UiUpdate::ActivateTab(tab));

        if tab == Tab::Inventory {
            self.load_inventory().await;
        }
    }

    /// Open the detail view for the item at `index` in the loaded inventory
    pub fn show_item_details(&self, index: usize) {
        let details = {
            let mut state = self.lock();
            let details = state.inventory.get(index).map(render_item_details);
            if details.is_some() {
                state.open_item = Some(index);
            }
            details
        };

        match details {
            Some(details) => self.ui.apply(UiUpdate::ShowItemDetails(details)),
            None => tracing::debug!(index, "No inventory item at index"),
        }
    }

    /// Dismiss the detail view. Also used for clicks outside of it.
    pub fn close_item_details(&self) {
        let was_open = self.lock().open_item.take().is_some();
        if was_open {
            self.ui.apply(UiUpdate::CloseItemDetails);
        }
    }

    pub fn save_settings(&self, api_base_url: &str, auto_refresh_enabled: bool) {
        let settings = ClientSettings::new(api_base_url.trim(), auto_refresh_enabled);

        self.lock().settings = settings.clone();
        self.store.save_settings(&settings);
        tracing::info!(
            api_base_url = %settings.api_base_url,
            auto_refresh_enabled,
            "Settings saved"
        );

        self.ui.apply(UiUpdate::SettingsLoaded(settings));
        self.ui
            .apply(UiUpdate::Acknowledge(messages::SETTINGS_SAVED.to_string()));
    }

    /// Flip the live auto-refresh flag. Not persisted until settings are saved.
    pub fn set_auto_refresh(&self, enabled: bool) {
        let settings = {
            let mut state = self.lock();
            state.settings.auto_refresh_enabled = enabled;
            state.settings.clone()
        };
        self.ui.apply(UiUpdate::SettingsLoaded(settings));
    }

    /// Whether a timer tick right now would reload the inventory
    pub fn auto_refresh_due(&self) -> bool {
        let state = self.lock();
        state.settings.auto_refresh_enabled
            && state.session.has_token()
            && state.active_tab == Tab::Inventory
    }

    /// One timer tick. Returns whether a reload was performed.
    pub async fn auto_refresh_tick(&self) -> bool {
        if !self.auto_refresh_due() {
            return false;
        }
        tracing::debug!("Auto-refreshing inventory");
        self.load_inventory().await;
        true
    }

    pub fn session(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn inventory(&self) -> Vec<InventoryItem> {
        self.lock().inventory.clone()
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_items(&self.lock().inventory)
    }

    pub fn settings(&self) -> ClientSettings {
        self.lock().settings.clone()
    }

    pub fn active_tab(&self) -> Tab {
        self.lock().active_tab
    }

    pub fn open_item(&self) -> Option<usize> {
        self.lock().open_item
    }
}
