//! Error types for the Index actor.

use crate::model::MovieKey;
use grain_framework::StorageError;
use thiserror::Error;

/// Errors that can occur during index operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndexError {
    /// One of the movie fetches of a `GetAll` failed, so the whole call failed.
    #[error("Fetching movie {key} failed: {reason}")]
    Fetch { key: MovieKey, reason: String },

    /// Persisting or loading the index record failed.
    #[error("Index storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
