//! # Movie Actor
//!
//! One grain per [`MovieKey`](crate::model::MovieKey), owning that movie's durable
//! [`Movie`](crate::model::Movie) record.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](grain_framework::ActorEntity) implementation ([`MovieGrain`])
//! - [`error`] - [`MovieError`] type for type-safe error handling
//! - [`actions`] - [`MovieAction`] and [`GenreChange`] for genre edits
//! - [`new()`] - Factory function that creates the host and client
//!
//! ## Contract
//!
//! - `Get` returns the movie, or `None` if it was never set or has been dropped.
//! - `Set` requires `movie.key` to equal the grain key and persists before replying.
//! - `Clear` (drop) removes the stored record; dropping an absent movie succeeds.
//! - Genre edits are no-ops, reported as [`GenreChange::Skipped`], when the movie is
//!   absent or the genre was never registered.
//!
//! The context is a [`GenreClient`](crate::clients::GenreClient), used for the registration
//! check.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::MovieClient;
use grain_framework::{ActorHost, RuntimeOptions, StateStore};
use std::sync::Arc;

/// Creates the movie host and its client.
pub fn new(store: Arc<dyn StateStore>, options: RuntimeOptions) -> (ActorHost<MovieGrain>, MovieClient) {
    let (host, generic_client) = ActorHost::new(store, options);
    (host, MovieClient::new(generic_client))
}
