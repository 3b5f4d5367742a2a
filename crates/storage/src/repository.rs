use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for a flat, string-keyed store.
///
/// Mirrors the browser's origin-scoped local storage: one value per key,
/// last write wins, no expiry.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Holds the key-value repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let kv: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
        Self { kv }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_remove_round_trip() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("answers").await.unwrap(), None);

        repo.put("answers", "{}").await.unwrap();
        repo.put("answers", r#"{"1":"A"}"#).await.unwrap();
        assert_eq!(
            repo.get("answers").await.unwrap().as_deref(),
            Some(r#"{"1":"A"}"#)
        );

        repo.remove("answers").await.unwrap();
        repo.remove("answers").await.unwrap();
        assert_eq!(repo.get("answers").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.put("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
