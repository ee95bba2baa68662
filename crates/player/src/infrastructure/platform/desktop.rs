//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! the standard library, tokio and native crates.

use crate::ports::outbound::platform::{SleepProvider, StorageProvider};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/gamevault-player/storage.json
/// - macOS: ~/Library/Application Support/io.gamevault.gamevault-player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\gamevault\gamevault-player\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<BTreeMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider at the platform config location
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("io", "gamevault", "gamevault-player") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            // Fallback to current directory if project dirs unavailable
            None => PathBuf::from("gamevault_storage.json"),
        };

        Self::at_path(storage_path)
    }

    /// Create a storage provider backed by the given file
    ///
    /// Loads existing data from the file if it exists. An unreadable or
    /// corrupt file is logged and treated as empty.
    pub fn at_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = load_cache(&storage_path);

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Write `cache` to a temporary file, then rename it over the storage
    /// file. Callers hold the write lock.
    fn persist(&self, cache: &BTreeMap<String, String>) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let data = match serde_json::to_string_pretty(cache) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
                return;
            }
        };

        let staging = self.storage_path.with_extension("json.tmp");
        if let Err(e) =
            fs::write(&staging, data).and_then(|()| fs::rename(&staging, &self.storage_path))
        {
            tracing::error!("Failed to write storage file: {}", e);
        }
    }
}

fn load_cache(storage_path: &Path) -> BTreeMap<String, String> {
    if !storage_path.exists() {
        return BTreeMap::new();
    }

    match fs::read_to_string(storage_path) {
        Ok(data) => match serde_json::from_str::<BTreeMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Failed to parse storage file: {}", e);
                BTreeMap::new()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read storage file: {}", e);
            BTreeMap::new()
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                self.persist(&guard);
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                if guard.remove(key).is_some() {
                    self.persist(&guard);
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Create platform services for desktop
///
/// `storage_path` overrides the platform config location.
pub fn create_platform(storage_path: Option<PathBuf>) -> Platform {
    let storage = match storage_path {
        Some(path) => DesktopStorageProvider::at_path(path),
        None => DesktopStorageProvider::new(),
    };

    Platform::new(DesktopSleepProvider, storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("accessToken", "tok1");
        storage.save("autoRefresh", "true");

        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("accessToken").as_deref(), Some("tok1"));
        assert_eq!(reopened.load("autoRefresh").as_deref(), Some("true"));
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = DesktopStorageProvider::at_path(&path);
        storage.save("accessToken", "tok1");
        storage.save("apiUrl", "http://localhost:8080/api");
        storage.remove("accessToken");

        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("accessToken"), None);
        assert_eq!(
            reopened.load("apiUrl").as_deref(),
            Some("http://localhost:8080/api")
        );
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::at_path(&path);
        assert_eq!(storage.load("accessToken"), None);

        storage.save("accessToken", "tok2");
        let reopened = DesktopStorageProvider::at_path(&path);
        assert_eq!(reopened.load("accessToken").as_deref(), Some("tok2"));
    }

    #[test]
    fn test_concurrent_saves_leave_a_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = DesktopStorageProvider::at_path(&path);

        let writers: Vec<_> = (0..8)
            .map(|n| {
                let storage = storage.clone();
                std::thread::spawn(move || {
                    for round in 0..25 {
                        storage.save(&format!("key{}", n), &format!("value{}", round));
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 8);
        assert!(on_disk.values().all(|value| value == "value24"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_sleep_provider_completes() {
        DesktopSleepProvider.sleep_ms(1).await;
    }
}
