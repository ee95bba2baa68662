//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the session client to interact with the game API, durable storage
//! and the UI layer without depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod raw_api_port;
pub mod ui_port;

pub use api_port::ApiError;
pub use platform::{storage_keys, SleepProvider, StorageProvider};
pub use raw_api_port::RawApiPort;
pub use ui_port::{UiPort, UiUpdate};

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
