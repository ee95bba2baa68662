//! Platform container
//!
//! `Platform` bundles the sleep and storage providers behind type-erased
//! handles so it can be cloned freely and passed around without generics.
//! The runner builds it with `create_platform()`, tests with
//! `create_mock_platform()`.

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{SleepProvider, StorageProvider};

#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn erased::ErasedSleep>,
    storage: Arc<dyn erased::ErasedStorage>,
}

/// The port traits require `Clone`, which is not object safe. These mirrors
/// drop that bound so the providers can live behind `Arc<dyn ...>`. Kept out
/// of the parent scope so method calls on a `StorageProvider` stay unambiguous.
mod erased {
    use std::{future::Future, pin::Pin};

    use crate::ports::outbound::{SleepProvider, StorageProvider};

    pub(super) trait ErasedSleep: Send + Sync {
        fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
    }

    pub(super) trait ErasedStorage: Send + Sync {
        fn save(&self, key: &str, value: &str);
        fn load(&self, key: &str) -> Option<String>;
        fn remove(&self, key: &str);
    }

    impl<T: SleepProvider + Send + Sync> ErasedSleep for T {
        fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
            SleepProvider::sleep_ms(self, ms)
        }
    }

    impl<T: StorageProvider + Send + Sync> ErasedStorage for T {
        fn save(&self, key: &str, value: &str) {
            StorageProvider::save(self, key, value)
        }
        fn load(&self, key: &str) -> Option<String> {
            StorageProvider::load(self, key)
        }
        fn remove(&self, key: &str) {
            StorageProvider::remove(self, key)
        }
    }
}

impl Platform {
    pub fn new<Sl, S>(sleep: Sl, storage: S) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
        }
    }

    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// This platform's storage as a `StorageProvider`, for services that are
    /// generic over the port (`SessionStore`)
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }
}

/// `StorageProvider` view of a `Platform`
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn test_storage_adapter_shares_platform_storage() {
        let platform = create_mock_platform();
        let adapter = platform.storage_adapter();

        adapter.save("apiUrl", "http://example.test/api");
        assert_eq!(
            platform.storage_load("apiUrl").as_deref(),
            Some("http://example.test/api")
        );

        platform.storage_remove("apiUrl");
        assert_eq!(adapter.load("apiUrl"), None);
    }

    #[tokio::test]
    async fn test_sleep_delegates_to_provider() {
        let platform = create_mock_platform();
        platform.sleep_ms(30_000).await;
    }
}
