//! Custom actions for the Movie actor.
//!
//! Genre edits go through the movie grain so that the membership check against the
//! genre grain and the write happen inside the movie's single-writer turn.

/// Custom actions for movie grains.
#[derive(Debug, Clone)]
pub enum MovieAction {
    /// Adds a genre to the movie's set.
    AddGenre(String),
    /// Removes a genre from the movie's set.
    RemoveGenre(String),
}

/// Outcome of a genre edit. Guarded no-ops are reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreChange {
    /// The genre set was updated and persisted.
    Applied,
    /// Nothing was changed.
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The movie has no state.
    MovieAbsent,
    /// The genre grain has no record, or its name is empty.
    GenreUnregistered,
}
