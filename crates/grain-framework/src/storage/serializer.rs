//! State serialization.

use super::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JSON encoding for stored actor state.
///
/// JSON keeps the store human-readable, which matters more here than blob size:
/// the files written by [`FileStore`](super::FileStore) are meant to be inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn serialize<S: Serialize>(&self, state: &S) -> Result<Vec<u8>, StorageError> {
        serde_json::to_vec(state).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    pub fn deserialize<S: DeserializeOwned>(&self, blob: &[u8]) -> Result<S, StorageError> {
        serde_json::from_slice(blob).map_err(|e| StorageError::Deserialization(e.to_string()))
    }
}
