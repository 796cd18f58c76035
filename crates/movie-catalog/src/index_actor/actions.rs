//! Custom actions for the Index actor.

use crate::model::{Movie, MovieKey};

#[derive(Debug, Clone)]
pub enum IndexAction {
    /// Fetches every indexed movie concurrently.
    GetAll,
    /// Adds `key -> name` unless `key` is already listed.
    Insert { key: MovieKey, name: String },
    /// Removes `key` if it is listed.
    Remove(MovieKey),
}

/// Results from IndexActions - variants match 1:1 with IndexAction
#[derive(Debug, Clone)]
pub enum IndexActionResult {
    GetAll(Vec<Movie>),
    /// Whether the key was newly added.
    Insert(bool),
    /// Whether the key was listed and has been removed.
    Remove(bool),
}
