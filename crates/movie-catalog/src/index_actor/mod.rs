//! # Index Actor
//!
//! The catalog-wide singleton that maps every enumerable movie key to its display
//! name. It lives at [`MovieIndexId::EMPTY`](crate::model::MovieIndexId::EMPTY).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](grain_framework::ActorEntity) implementation ([`IndexGrain`])
//! - [`error`] - [`IndexError`] type for type-safe error handling
//! - [`actions`] - [`IndexAction`] and [`IndexActionResult`]
//! - [`new()`] - Factory function that creates the host and client
//!
//! ## Contract
//!
//! - The first activation with no stored record persists an empty index before any
//!   request is answered, so `Get` never sees "absent".
//! - `GetAll` fetches every indexed movie concurrently. A single failed fetch fails the
//!   whole call; movies that turn out to be absent are skipped.
//! - `Insert`/`Remove` only persist when they change the record.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::MovieIndexClient;
use grain_framework::{ActorHost, RuntimeOptions, StateStore};
use std::sync::Arc;

/// Creates the index host and its client.
pub fn new(
    store: Arc<dyn StateStore>,
    options: RuntimeOptions,
) -> (ActorHost<IndexGrain>, MovieIndexClient) {
    let (host, generic_client) = ActorHost::new(store, options);
    (host, MovieIndexClient::new(generic_client))
}
