//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a grain type implements to be hosted by the
//! runtime. One value of the implementing type exists per *active* key: it is created by
//! [`ActorEntity::new_activation`] when the first request for that key arrives, lives inside
//! exactly one [`ResourceActor`](crate::ResourceActor) task, and is dropped when the
//! activation goes idle. Anything that must survive deactivation belongs in
//! [`ActorEntity::State`], which the runtime loads from and writes to the
//! [`StateStore`](crate::StateStore) through [`PersistentState`].
//!
//! # Provided Methods (Hooks)
//! Every hook except [`ActorEntity::handle_action`] has a default that does nothing:
//! - [`ActorEntity::on_activate`] - after state is loaded, before the first request.
//! - [`ActorEntity::on_set`] - validation before a whole-state replace.
//! - [`ActorEntity::on_clear`] - before the stored state is cleared.
//! - [`ActorEntity::on_deactivate`] - after the last request, before the task exits.

use crate::state::PersistentState;
use crate::storage::StorageError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Why an activation is going away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeactivationReason {
    /// No request arrived within [`RuntimeOptions::idle_timeout`](crate::RuntimeOptions::idle_timeout).
    IdleTimeout,
    /// The host is shutting down.
    Shutdown,
}

/// Trait that any grain type must implement to be hosted by the runtime.
///
/// # Async & Context
/// Hooks are `async` so a grain can call other grains while handling a request. The call
/// suspends only this activation; other keys keep running. `Context` carries those
/// dependencies (usually other clients) and is bound late, in
/// [`ActorHost::run`](crate::ActorHost::run), so grain types may depend on each other.
#[async_trait]
pub trait ActorEntity: Send + 'static {
    /// The identity of one grain (e.g. `i64`, `String`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The durable part of the grain, persisted as JSON.
    type State: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Enum of grain-specific operations beyond Get/Set/Clear.
    type Action: Send + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Debug;

    /// The runtime context (dependencies) injected into every hook.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// The error type for this grain. Storage failures inside a hook convert into it, so
    /// `state.set(..).await?` works in `handle_action`.
    type Error: std::error::Error + From<StorageError> + Send + Sync + 'static;

    /// Storage partition name; also used as the `entity_type` field in logs.
    const KIND: &'static str;

    /// Builds the transient, in-memory part of a fresh activation.
    fn new_activation(id: &Self::Id) -> Self;

    // --- Lifecycle Hooks (Async) ---

    /// Called once per activation, after state was loaded and before any request is handled.
    async fn on_activate(
        &mut self,
        _id: &Self::Id,
        _state: &mut PersistentState<Self::State>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before a `Set` replaces the whole state. Returning an error rejects the write.
    fn on_set(&self, _id: &Self::Id, _state: &Self::State) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before a `Clear` removes the stored state.
    async fn on_clear(&mut self, _id: &Self::Id, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when the activation stops receiving requests.
    async fn on_deactivate(&mut self, _id: &Self::Id, _reason: DeactivationReason) {}

    // --- Action Handler (Async) ---

    /// Handle a custom grain-specific action.
    async fn handle_action(
        &mut self,
        id: &Self::Id,
        action: Self::Action,
        state: &mut PersistentState<Self::State>,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
