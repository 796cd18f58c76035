//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the grain hosts behind the catalog.
//!
//! ## Dependency Injection via Context
//!
//! Every host is created before any of them runs, and each receives its
//! [`ActorEntity::Context`](grain_framework::ActorEntity::Context) in `run(context)`:
//!
//! | Host | Context | Used for |
//! |------|---------|----------|
//! | movie | `GenreClient` | genre registration guard |
//! | index | `MovieClient` | `GetAll` fan-out |
//! | genre | `()` | none; movie existence for links is checked by the facade |
//!
//! ## Graceful Shutdown
//!
//! 1. **Signal each host** - new requests are refused from here on
//! 2. **Drain** - every activation finishes its queued requests and deactivates
//! 3. **Await completion** - the host tasks return
//!
//! State needs no flush step: every acknowledged write was already persisted.
//!
//! ## Observability
//!
//! Call [`grain_framework::tracing::setup_tracing`] once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle events
//! RUST_LOG=debug cargo run     # Request flow with payloads
//! ```

pub mod catalog_system;
pub mod config;

pub use catalog_system::*;
pub use config::*;
