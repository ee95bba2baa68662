//! Composition root: wires platform, HTTP adapter, session client, timer and
//! terminal shell together.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;

use gamevault_domain::ClientSettings;

use crate::application::{Api, AutoRefreshTimer, SessionClient};
use crate::infrastructure::http_client::ApiAdapter;
use crate::infrastructure::platform::create_platform;
use crate::ui::terminal::{run_shell, TerminalUi, USAGE};

/// Process configuration for the player binary.
pub mod config {
    use std::env;
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use url::Url;

    use gamevault_domain::DEFAULT_API_URL;

    use crate::infrastructure::http_client::DEFAULT_REQUEST_TIMEOUT_MS;

    pub const API_URL_VAR: &str = "GAMEVAULT_API_URL";
    pub const STORAGE_PATH_VAR: &str = "GAMEVAULT_STORAGE_PATH";
    pub const REQUEST_TIMEOUT_VAR: &str = "GAMEVAULT_REQUEST_TIMEOUT_MS";

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        /// API base URL used until the user saves one
        pub api_url: String,
        /// Storage file override; `None` means the platform config directory
        pub storage_path: Option<PathBuf>,
        pub request_timeout: Duration,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                api_url: DEFAULT_API_URL.to_string(),
                storage_path: None,
                request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            }
        }
    }

    impl RunnerConfig {
        pub fn from_env() -> Result<Self> {
            Self::from_lookup(|name| env::var(name).ok())
        }

        /// Build from any variable source. Blank values count as unset.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
            let var = |name: &str| {
                lookup(name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            };
            let defaults = Self::default();

            let api_url = match var(API_URL_VAR) {
                Some(raw) => {
                    Url::parse(&raw)
                        .with_context(|| format!("{} is not a valid URL: {}", API_URL_VAR, raw))?;
                    raw
                }
                None => defaults.api_url,
            };

            let request_timeout = match var(REQUEST_TIMEOUT_VAR) {
                Some(raw) => Duration::from_millis(raw.parse::<u64>().with_context(|| {
                    format!("{} must be a number of milliseconds", REQUEST_TIMEOUT_VAR)
                })?),
                None => defaults.request_timeout,
            };

            Ok(Self {
                api_url,
                storage_path: var(STORAGE_PATH_VAR).map(PathBuf::from),
                request_timeout,
            })
        }
    }
}

use config::RunnerConfig;

/// Run the player until the shell exits
pub async fn run(config: RunnerConfig) -> Result<()> {
    tracing::info!(api_url = %config.api_url, "Starting Game Vault player");

    let platform = create_platform(config.storage_path.clone());
    let api = Api::new(Arc::new(ApiAdapter::with_timeout(config.request_timeout)));
    let ui = Arc::new(TerminalUi::new(std::io::stdout()));

    let client = SessionClient::new(
        api,
        &platform,
        ui.clone(),
        ClientSettings::new(config.api_url, false),
    );

    ui.print(USAGE);
    client.initialize().await;

    let timer = tokio::spawn(AutoRefreshTimer::new(client.clone(), platform).run());

    let stdin = BufReader::new(tokio::io::stdin());
    let result = run_shell(stdin, client, ui)
        .await
        .context("Failed to read from stdin");

    timer.abort();
    tracing::info!("Game Vault player stopped");
    result
}
