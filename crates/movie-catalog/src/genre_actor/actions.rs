//! Custom actions for the Genre actor.

use crate::model::MovieKey;

#[derive(Debug, Clone)]
pub enum GenreAction {
    /// Records that a movie carries this genre.
    LinkMovie(MovieKey),
    /// Always rejected with [`GenreError::Unsupported`](super::GenreError::Unsupported).
    UnlinkMovie(MovieKey),
    /// Snapshot of the linked movie keys, ascending.
    LinkedMovies,
}

/// Results from GenreActions. `UnlinkMovie` has no result because it never succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreActionResult {
    /// Whether the key was newly added to the link set.
    LinkMovie(bool),
    LinkedMovies(Vec<MovieKey>),
}
