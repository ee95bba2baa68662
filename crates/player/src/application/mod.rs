//! Application layer - the session client and everything it orchestrates

pub mod api;
pub mod auto_refresh;
pub mod dispatch;
pub mod services;
pub mod session_client;

pub use api::Api;
pub use auto_refresh::{AutoRefreshTimer, AUTO_REFRESH_INTERVAL_MS};
pub use dispatch::{dispatch, DemoAccount, UiAction};
pub use session_client::{messages, SessionClient};
