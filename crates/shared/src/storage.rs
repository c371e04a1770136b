use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Serialize, de::DeserializeOwned};

/// Key-value persistence used by the meal plan store and preferences.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Default, Clone)]
pub struct MemoryStorage(Arc<Mutex<HashMap<String, String>>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

/// Reads and decodes a JSON value. Missing keys, read errors and malformed
/// payloads all resolve to `None`.
pub async fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, err = %err, "failed to read from storage");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, err = %err, "ignoring malformed stored value");
            None
        }
    }
}

/// Encodes and writes a JSON value; failures are logged and dropped.
pub async fn save_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(key, err = %err, "failed to encode value for storage");
            return;
        }
    };

    if let Err(err) = storage.set(key, &raw).await {
        tracing::warn!(key, err = %err, "failed to write to storage");
    }
}
