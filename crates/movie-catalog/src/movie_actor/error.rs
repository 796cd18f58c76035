//! Error types for the Movie actor.

use crate::model::MovieKey;
use grain_framework::StorageError;
use thiserror::Error;

/// Errors that can occur during movie operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MovieError {
    /// A `Set` carried a movie whose key is not the grain's key.
    #[error("Key mismatch: grain {expected}, movie {actual}")]
    KeyMismatch { expected: MovieKey, actual: MovieKey },

    /// The genre grain could not be asked whether a genre is registered.
    #[error("Genre lookup failed: {0}")]
    GenreLookup(String),

    /// Persisting or loading movie state failed.
    #[error("Movie storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
