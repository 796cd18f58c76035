//! Error types for the Genre actor.

use grain_framework::StorageError;
use thiserror::Error;

/// Errors that can occur during genre operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenreError {
    /// The operation exists on the genre grain but is deliberately not implemented.
    #[error("Unsupported genre operation: {0}")]
    Unsupported(&'static str),

    /// Persisting or loading genre state failed.
    #[error("Genre storage error: {0}")]
    Storage(#[from] StorageError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
