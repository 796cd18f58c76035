//! # Genre Actor
//!
//! One grain per genre name. The persisted [`Genre`](crate::model::Genre) record is what
//! "registered" means to the movie grain's genre guard.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](grain_framework::ActorEntity) implementation ([`GenreGrain`])
//! - [`error`] - [`GenreError`] type for type-safe error handling
//! - [`actions`] - [`GenreAction`] and [`GenreActionResult`]
//! - [`new()`] - Factory function that creates the host and client
//!
//! ## Linking
//!
//! `LinkMovie` records the key in an in-memory set. The grain has no context and never
//! calls other grains, so movie grains can wait on it freely. The set is advisory: it is not persisted and is lost on deactivation.
//! `UnlinkMovie` always fails with [`GenreError::Unsupported`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::GenreClient;
use grain_framework::{ActorHost, RuntimeOptions, StateStore};
use std::sync::Arc;

/// Creates the genre host and its client.
pub fn new(store: Arc<dyn StateStore>, options: RuntimeOptions) -> (ActorHost<GenreGrain>, GenreClient) {
    let (host, generic_client) = ActorHost::new(store, options);
    (host, GenreClient::new(generic_client))
}
