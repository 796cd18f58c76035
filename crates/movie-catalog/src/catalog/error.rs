//! Error type of the catalog facade.

use crate::genre_actor::GenreError;
use crate::index_actor::IndexError;
use crate::movie_actor::MovieError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Rejected before any grain was contacted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operation is deliberately not implemented.
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// A grain call, or the storage behind it, failed.
    #[error("Dependency failure: {0}")]
    Dependency(String),
}

impl From<MovieError> for CatalogError {
    fn from(e: MovieError) -> Self {
        match e {
            MovieError::KeyMismatch { .. } => CatalogError::InvalidInput(e.to_string()),
            other => CatalogError::Dependency(other.to_string()),
        }
    }
}

impl From<IndexError> for CatalogError {
    fn from(e: IndexError) -> Self {
        CatalogError::Dependency(e.to_string())
    }
}

impl From<GenreError> for CatalogError {
    fn from(e: GenreError) -> Self {
        match e {
            GenreError::Unsupported(op) => CatalogError::Unsupported(op.to_string()),
            other => CatalogError::Dependency(other.to_string()),
        }
    }
}
