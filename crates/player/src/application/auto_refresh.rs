//! Periodic inventory refresh
//!
//! The timer wakes every [`AUTO_REFRESH_INTERVAL_MS`] and dispatches an
//! `AutoRefreshTick` on its own task, so the period does not stretch while a
//! reload is in flight. Whether the tick actually reloads is decided by the
//! session client from live state (flag, token, active tab) at tick time.

use crate::application::dispatch::{dispatch, UiAction};
use crate::application::session_client::SessionClient;
use crate::state::Platform;

pub const AUTO_REFRESH_INTERVAL_MS: u64 = 30_000;

#[derive(Clone)]
pub struct AutoRefreshTimer {
    client: SessionClient,
    platform: Platform,
    interval_ms: u64,
}

impl AutoRefreshTimer {
    pub fn new(client: SessionClient, platform: Platform) -> Self {
        Self {
            client,
            platform,
            interval_ms: AUTO_REFRESH_INTERVAL_MS,
        }
    }

    pub async fn tick(&self) {
        dispatch(&self.client, UiAction::AutoRefreshTick).await;
    }

    /// Tick forever. Spawn this once per client.
    pub async fn run(self) {
        tracing::debug!(interval_ms = self.interval_ms, "Auto-refresh timer started");
        loop {
            self.platform.sleep_ms(self.interval_ms).await;
            let timer = self.clone();
            tokio::spawn(async move { timer.tick().await });
        }
    }
}
