//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! a [`ResourceClient`](crate::ResourceClient) and the [`ResourceActor`](crate::ResourceActor)
//! that currently owns the target key.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the activation that owns `id`.
///
/// Every grain gets the same three state operations for free:
///
/// - **Get**: the current state, or `None` when absent.
/// - **Set**: replace the whole state and persist it before replying.
/// - **Clear**: remove the stored state. Clearing absent state succeeds.
///
/// Anything else is a grain-specific [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T::State>>,
    },
    Set {
        id: T::Id,
        state: T::State,
        respond_to: Response<()>,
    },
    Clear {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// The key this request is routed by.
    pub fn id(&self) -> &T::Id {
        match self {
            ResourceRequest::Get { id, .. }
            | ResourceRequest::Set { id, .. }
            | ResourceRequest::Clear { id, .. }
            | ResourceRequest::Action { id, .. } => id,
        }
    }

    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Set { .. } => "Set",
            ResourceRequest::Clear { .. } => "Clear",
            ResourceRequest::Action { .. } => "Action",
        }
    }

    /// Answers the request with `error` without running it.
    pub(crate) fn reject(self, error: FrameworkError) {
        match self {
            ResourceRequest::Get { respond_to, .. } => {
                let _ = respond_to.send(Err(error));
            }
            ResourceRequest::Set { respond_to, .. } | ResourceRequest::Clear { respond_to, .. } => {
                let _ = respond_to.send(Err(error));
            }
            ResourceRequest::Action { respond_to, .. } => {
                let _ = respond_to.send(Err(error));
            }
        }
    }
}
