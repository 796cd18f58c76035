//! In-memory storage backend.

use super::{StateStore, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Partitions = HashMap<(String, String), Vec<u8>>;

/// Process-local store. Cloning shares the same underlying map, so a store can
/// outlive one actor system and be handed to the next one (useful for restart tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<Partitions>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all partitions.
    pub fn len(&self) -> usize {
        self.lock().map(|data| data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record exists for `(kind, key)`.
    pub fn contains(&self, kind: &str, key: &str) -> bool {
        self.lock()
            .map(|data| data.contains_key(&(kind.to_string(), key.to_string())))
            .unwrap_or(false)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Partitions>, StorageError> {
        self.data
            .lock()
            .map_err(|_| StorageError::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self, kind: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let data = self.lock()?;
        Ok(data.get(&(kind.to_string(), key.to_string())).cloned())
    }

    async fn save(&self, kind: &str, key: &str, blob: Vec<u8>) -> Result<(), StorageError> {
        let mut data = self.lock()?;
        data.insert((kind.to_string(), key.to_string()), blob);
        Ok(())
    }

    async fn clear(&self, kind: &str, key: &str) -> Result<(), StorageError> {
        let mut data = self.lock()?;
        data.remove(&(kind.to_string(), key.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        store.save("movie", "1", vec![1, 2, 3]).await.unwrap();

        assert_eq!(store.load("movie", "1").await.unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(store.load("movie", "2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_partitions_are_independent() {
        let store = MemoryStore::new();
        store.save("movie", "1", vec![1]).await.unwrap();
        store.save("genre", "1", vec![2]).await.unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.load("genre", "1").await.unwrap(), Some(vec![2]));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save("movie", "1", vec![1]).await.unwrap();

        store.clear("movie", "1").await.unwrap();
        store.clear("movie", "1").await.unwrap();
        store.clear("movie", "never-saved").await.unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save("movie", "1", vec![9]).await.unwrap();

        assert!(other.contains("movie", "1"));
    }
}
