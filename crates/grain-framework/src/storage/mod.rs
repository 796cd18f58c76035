//! # Durable State Storage
//!
//! Actors never talk to a database directly. Each actor type owns a partition
//! (its [`ActorEntity::KIND`](crate::ActorEntity::KIND)) and each activation owns
//! one key inside that partition. The [`StateStore`] trait is the only contract
//! the runtime needs from a backend: load, save and clear an opaque blob.
//!
//! Two backends are provided:
//!
//! - [`MemoryStore`] - a process-local map, used by tests and demos.
//! - [`FileStore`] - one JSON file per `(kind, key)` under a root directory.
//!
//! Typed access on top of the raw blobs lives in [`PersistentState`](crate::PersistentState).

pub mod error;
pub mod file;
pub mod memory;
pub mod serializer;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use serializer::JsonSerializer;

use async_trait::async_trait;

/// Key-value persistence for actor state.
///
/// Implementations must be safe to share between every activation in the
/// process. The runtime guarantees that a given `(kind, key)` pair is only
/// ever accessed by one activation at a time, so backends don't need
/// per-key locking.
#[async_trait]
pub trait StateStore: Send + Sync + std::fmt::Debug {
    /// Loads the blob stored for `(kind, key)`.
    ///
    /// Returns `Ok(None)` when nothing was ever saved (or it was cleared).
    async fn load(&self, kind: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Saves (replaces) the blob for `(kind, key)`.
    async fn save(&self, kind: &str, key: &str, blob: Vec<u8>) -> Result<(), StorageError>;

    /// Removes the blob for `(kind, key)`. Clearing an absent key succeeds.
    async fn clear(&self, kind: &str, key: &str) -> Result<(), StorageError>;
}
