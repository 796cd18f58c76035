//! Typed persistent state for one activation.
//!
//! `PersistentState<S>` sits between a grain and the raw [`StateStore`]. It keeps the
//! last value that was successfully written and is *write-through*: [`PersistentState::set`]
//! serializes and saves first, and only swaps the in-memory value once the store has
//! acknowledged. A failed write therefore leaves the activation exactly as it was.

use crate::storage::{JsonSerializer, StateStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub struct PersistentState<S> {
    kind: &'static str,
    key: String,
    store: Arc<dyn StateStore>,
    serializer: JsonSerializer,
    value: Option<S>,
}

impl<S: Serialize + DeserializeOwned> PersistentState<S> {
    /// Reads the stored record for `(kind, key)`, if any.
    pub async fn load(
        store: Arc<dyn StateStore>,
        kind: &'static str,
        key: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let key = key.into();
        let serializer = JsonSerializer;
        let value = match store.load(kind, &key).await? {
            Some(blob) => Some(serializer.deserialize(&blob)?),
            None => None,
        };
        debug!(entity_type = kind, %key, found = value.is_some(), "State loaded");
        Ok(Self {
            kind,
            key,
            store,
            serializer,
            value,
        })
    }

    /// The current value, `None` if nothing was ever written or it was cleared.
    pub fn get(&self) -> Option<&S> {
        self.value.as_ref()
    }

    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// The storage key of this record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persists `value` and, once the store has accepted it, makes it the current value.
    pub async fn set(&mut self, value: S) -> Result<(), StorageError> {
        let blob = self.serializer.serialize(&value)?;
        self.store.save(self.kind, &self.key, blob).await?;
        self.value = Some(value);
        Ok(())
    }

    /// Clears the stored record, then forgets the in-memory value.
    pub async fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear(self.kind, &self.key).await?;
        self.value = None;
        Ok(())
    }
}
