//! Platform ports: timers and durable key-value storage
//!
//! Implemented by `infrastructure::platform` (tokio sleep, JSON file) and by
//! the in-memory doubles used in tests. The `Platform` container that holds
//! them lives in `state/platform.rs`.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Drives the auto-refresh timer without tying it to a specific runtime.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
}

/// Durable key-value storage (local-storage semantics)
///
/// Failures are the provider's concern: they are logged, never returned, so
/// callers treat storage as always available.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Keys under which the session and settings are persisted
pub mod storage_keys {
    pub const ACCESS_TOKEN: &str = "accessToken";
    pub const CURRENT_USER: &str = "currentUser";
    pub const API_URL: &str = "apiUrl";
    pub const AUTO_REFRESH: &str = "autoRefresh";
}
