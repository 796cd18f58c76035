//! # Framework Errors
//!
//! Errors produced by the runtime itself: transport failures between a client and an
//! activation, activation failures, and storage failures on the generic Get/Set/Clear
//! paths. Errors raised by a grain's own hooks travel as [`FrameworkError::EntityError`]
//! and can be recovered with [`FrameworkError::entity_error`].

use crate::storage::StorageError;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Actor call timed out after {0:?}")]
    Timeout(Duration),
    #[error("Activation failed: {0}")]
    Activation(StorageError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    #[error("Unexpected reply to {0}")]
    UnexpectedReply(&'static str),
}

impl FrameworkError {
    /// Returns the grain error carried by an `EntityError`, if it is an `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
