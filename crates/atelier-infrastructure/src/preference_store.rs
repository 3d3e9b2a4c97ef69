//! Preference store backends.
//!
//! The preference store is a string key-value transport: values are staged
//! in memory with `set_value` and committed to the backing medium with
//! `flush`. The serialized application state lives under a single key.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use atelier_core::AtelierError;
use atelier_core::error::Result;

/// Key-value preference storage used for serialized application state.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    async fn value(&self, key: &str) -> Option<String>;

    /// Stages `value` under `key`. Not durable until `flush`.
    async fn set_value(&self, key: &str, value: String);

    /// Commits staged values to the backing medium.
    async fn flush(&self) -> Result<()>;
}

/// In-memory preference store.
///
/// `flush` is a no-op; everything is lost when the process exits. Useful for
/// tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn value(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }

    async fn set_value(&self, key: &str, value: String) {
        self.values.lock().await.insert(key.to_string(), value);
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// File-backed preference store.
///
/// Keeps the full preference map cached in memory and serializes it as one
/// JSON object on every flush. A missing or undecodable file starts the
/// cache empty rather than failing construction.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Opens the store at `path`, loading any previously flushed values.
    pub async fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(
                        "Discarding undecodable preference file {:?}: {}",
                        path,
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read preference file {:?}: {}", path, e);
                HashMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn value(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }

    async fn set_value(&self, key: &str, value: String) {
        self.values.lock().await.insert(key.to_string(), value);
    }

    async fn flush(&self) -> Result<()> {
        let serialized = {
            let values = self.values.lock().await;
            serde_json::to_string_pretty(&*values)?
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AtelierError::io(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(&self.path, serialized)
            .await
            .map_err(|e| AtelierError::io(format!("Failed to write preferences: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_store_set_and_get() {
        let store = MemoryPreferenceStore::new();
        assert!(store.value("k").await.is_none());

        store.set_value("k", "v".to_string()).await;
        assert_eq!(store.value("k").await, Some("v".to_string()));
        store.flush().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let store = JsonFilePreferenceStore::open(path.clone()).await;
        store.set_value("k", "v".to_string()).await;
        store.flush().await.unwrap();

        let reopened = JsonFilePreferenceStore::open(path).await;
        assert_eq!(reopened.value("k").await, Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_starts_empty_on_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFilePreferenceStore::open(path).await;
        assert!(store.value("k").await.is_none());
    }

    #[tokio::test]
    async fn test_flush_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("prefs.json");

        let store = JsonFilePreferenceStore::open(path.clone()).await;
        store.set_value("k", "v".to_string()).await;
        store.flush().await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_open_with_unreadable_path_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        // A directory at the preference path makes the read fail with
        // something other than NotFound.
        let path = temp_dir.path().join("prefs");
        std::fs::create_dir(&path).unwrap();

        let store = JsonFilePreferenceStore::open(path).await;
        assert!(store.value("k").await.is_none());
    }

    #[tokio::test]
    async fn test_unflushed_values_are_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.json");

        let store = JsonFilePreferenceStore::open(path.clone()).await;
        store.set_value("k", "v".to_string()).await;
        // No flush.

        let reopened = JsonFilePreferenceStore::open(path).await;
        assert!(reopened.value("k").await.is_none());
    }
}
