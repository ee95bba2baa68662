//! Session and settings persistence
//!
//! Reads and writes the session and the client settings through the storage
//! port, under the keys defined in `storage_keys`.

use gamevault_domain::{parse_flag, ClientSettings, CurrentUser, Session};

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Typed access to the persisted session and settings
#[derive(Clone)]
pub struct SessionStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load whatever session was persisted
    ///
    /// A `currentUser` entry that does not decode is treated as absent.
    pub fn load_session(&self) -> Session {
        let access_token = self.storage.load(storage_keys::ACCESS_TOKEN);
        let user = self
            .storage
            .load(storage_keys::CURRENT_USER)
            .and_then(|raw| match serde_json::from_str::<CurrentUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable stored user: {}", e);
                    None
                }
            });

        Session { access_token, user }
    }

    pub fn save_session(&self, session: &Session) {
        if let Some(token) = &session.access_token {
            self.storage.save(storage_keys::ACCESS_TOKEN, token);
        }
        if let Some(user) = &session.user {
            match serde_json::to_string(user) {
                Ok(json) => self.storage.save(storage_keys::CURRENT_USER, &json),
                Err(e) => tracing::error!("Failed to serialize current user: {}", e),
            }
        }
    }

    /// Remove the session keys; settings are left alone
    pub fn clear_session(&self) {
        self.storage.remove(storage_keys::ACCESS_TOKEN);
        self.storage.remove(storage_keys::CURRENT_USER);
    }

    /// Load settings, filling gaps from `defaults`
    ///
    /// An empty stored URL counts as unset. A stored auto-refresh flag other
    /// than `"true"` means disabled.
    pub fn load_settings(&self, defaults: &ClientSettings) -> ClientSettings {
        let api_base_url = self
            .storage
            .load(storage_keys::API_URL)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| defaults.api_base_url.clone());

        let auto_refresh_enabled = match self.storage.load(storage_keys::AUTO_REFRESH) {
            None => defaults.auto_refresh_enabled,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|e| {
                tracing::warn!("Treating stored auto-refresh flag as off: {}", e);
                false
            }),
        };

        ClientSettings {
            api_base_url,
            auto_refresh_enabled,
        }
    }

    pub fn save_settings(&self, settings: &ClientSettings) {
        self.storage.save(storage_keys::API_URL, &settings.api_base_url);
        self.storage.save(
            storage_keys::AUTO_REFRESH,
            if settings.auto_refresh_enabled {
                "true"
            } else {
                "false"
            },
        );
    }
}
