//! In-memory platform used by tests and throwaway sessions

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{SleepProvider, StorageProvider};
use crate::state::Platform;

/// Storage that lives only as long as the process
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.write() {
            data.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut data) = self.data.write() {
            data.remove(key);
        }
    }
}

/// Sleep that resolves immediately
#[derive(Clone, Default)]
pub struct ImmediateSleepProvider;

impl SleepProvider for ImmediateSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// Platform with empty in-memory storage
pub fn create_mock_platform() -> Platform {
    create_mock_platform_with(MemoryStorageProvider::new())
}

/// Platform over the given storage, so tests can inspect what was written
pub fn create_mock_platform_with(storage: MemoryStorageProvider) -> Platform {
    Platform::new(ImmediateSleepProvider, storage)
}
