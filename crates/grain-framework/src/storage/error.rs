//! Storage error types.

/// Errors raised by a [`StateStore`](super::StateStore) backend or while
/// converting state to and from its stored form.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StorageError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
    #[error("Storage I/O failed: {0}")]
    Io(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}
