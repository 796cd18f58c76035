//! # Grain Framework
//!
//! This crate provides a small virtual-actor runtime on top of Tokio. A *grain* is a
//! keyed, stateful actor that is never created or destroyed explicitly: callers address
//! it by key, the runtime activates it on the first request, persists its state through a
//! pluggable [`StateStore`], and deactivates it again when it has been idle for a while.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your grain's behavior and durable state type
//! 2. **Runtime Layer** ([`ActorHost`], [`ResourceActor`]) - Activation, routing, persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe, key-addressed calls
//!
//! ## Concurrency Model
//!
//! - Each activated key runs in its own Tokio task
//! - Requests for one key are processed **sequentially**, in arrival order
//! - Different keys, and different grain types, run in **parallel**
//! - A grain awaiting another grain only blocks its own key
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use grain_framework::{
//!     ActorEntity, ActorHost, MemoryStore, PersistentState, RuntimeOptions, StorageError,
//! };
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct Tally {
//!     count: u64,
//! }
//!
//! #[derive(Debug)]
//! enum TallyAction {
//!     Bump,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error(transparent)]
//! struct TallyError(#[from] StorageError);
//!
//! struct Counter;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = String;
//!     type State = Tally;
//!     type Action = TallyAction;
//!     type ActionResult = u64;
//!     type Context = ();
//!     type Error = TallyError;
//!
//!     const KIND: &'static str = "counter";
//!
//!     fn new_activation(_id: &String) -> Self {
//!         Counter
//!     }
//!
//!     async fn handle_action(
//!         &mut self,
//!         _id: &String,
//!         action: TallyAction,
//!         state: &mut PersistentState<Tally>,
//!         _ctx: &(),
//!     ) -> Result<u64, TallyError> {
//!         match action {
//!             TallyAction::Bump => {
//!                 let mut next = state.get().cloned().unwrap_or_default();
//!                 next.count += 1;
//!                 state.set(next.clone()).await?;
//!                 Ok(next.count)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (host, client) =
//!         ActorHost::<Counter>::new(Arc::new(MemoryStore::new()), RuntimeOptions::default());
//!     let running = tokio::spawn(host.run(()));
//!
//!     assert_eq!(client.perform_action("a".into(), TallyAction::Bump).await.unwrap(), 1);
//!     assert_eq!(client.get("a".into()).await.unwrap().unwrap().count, 1);
//!
//!     client.shutdown();
//!     running.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from a queue of expectations,
//! so logic built around clients can be tested without hosting anything.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod host;
pub mod message;
pub mod mock;
pub mod options;
pub mod state;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, DeactivationReason};
pub use error::FrameworkError;
pub use host::ActorHost;
pub use message::{ResourceRequest, Response};
pub use options::RuntimeOptions;
pub use state::PersistentState;
pub use storage::{FileStore, JsonSerializer, MemoryStore, StateStore, StorageError};
