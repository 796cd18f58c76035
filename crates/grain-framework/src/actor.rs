//! # Activation Worker
//!
//! This module defines the `ResourceActor`, the task that owns one activated key. It
//! implements the "Server" side of the Actor Model: requests for its key are processed
//! strictly one at a time, so the grain's state needs no locking.
//!
//! ## Lifecycle
//!
//! 1. Wait for the host's context to be bound.
//! 2. On the first request, load state from the store and call
//!    [`ActorEntity::on_activate`]. If that fails, the request is answered with the
//!    error and activation is retried on the next request.
//! 3. Serve requests until the inbox has been empty for
//!    [`RuntimeOptions::idle_timeout`](crate::RuntimeOptions::idle_timeout) or the host
//!    shuts down.
//! 4. Call [`ActorEntity::on_deactivate`] and exit. Only persisted state survives.

use crate::entity::{ActorEntity, DeactivationReason};
use crate::error::FrameworkError;
use crate::host::HostShared;
use crate::message::ResourceRequest;
use crate::state::PersistentState;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct Activation<T: ActorEntity> {
    entity: T,
    state: PersistentState<T::State>,
}

/// The task serving a single key of grain type `T`.
pub struct ResourceActor<T: ActorEntity> {
    id: T::Id,
    generation: u64,
    receiver: mpsc::UnboundedReceiver<ResourceRequest<T>>,
    shared: Arc<HostShared<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub(crate) fn new(
        id: T::Id,
        generation: u64,
        receiver: mpsc::UnboundedReceiver<ResourceRequest<T>>,
        shared: Arc<HostShared<T>>,
    ) -> Self {
        Self {
            id,
            generation,
            receiver,
            shared,
        }
    }

    pub(crate) async fn run(mut self) {
        let entity_type = T::KIND;
        let Some(context) = self.shared.wait_for_context().await else {
            return;
        };
        let idle_timeout = self.shared.options.idle_timeout;
        let mut activation: Option<Activation<T>> = None;

        let reason = loop {
            let msg = match tokio::time::timeout(idle_timeout, self.receiver.recv()).await {
                Ok(Some(msg)) => msg,
                Ok(None) => break DeactivationReason::Shutdown,
                Err(_) => {
                    if self
                        .shared
                        .try_evict(&self.id, self.generation, &self.receiver)
                    {
                        break DeactivationReason::IdleTimeout;
                    }
                    continue;
                }
            };

            if activation.is_none() {
                match self.activate(&context).await {
                    Ok(active) => activation = Some(active),
                    Err(e) => {
                        warn!(entity_type, id = %self.id, error = %e, "Activation failed");
                        msg.reject(e);
                        continue;
                    }
                }
            }
            if let Some(active) = activation.as_mut() {
                Self::handle(active, msg, &context).await;
            }
        };

        if let Some(mut active) = activation {
            active.entity.on_deactivate(&self.id, reason).await;
        }
        info!(entity_type, id = %self.id, ?reason, "Deactivated");
    }

    async fn activate(&self, context: &T::Context) -> Result<Activation<T>, FrameworkError> {
        let mut state =
            PersistentState::load(Arc::clone(&self.shared.store), T::KIND, self.id.to_string())
                .await
                .map_err(FrameworkError::Activation)?;
        let mut entity = T::new_activation(&self.id);
        entity
            .on_activate(&self.id, &mut state, context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        info!(entity_type = T::KIND, id = %self.id, exists = state.exists(), "Activated");
        Ok(Activation { entity, state })
    }

    async fn handle(active: &mut Activation<T>, msg: ResourceRequest<T>, context: &T::Context) {
        let entity_type = T::KIND;
        match msg {
            ResourceRequest::Get { id, respond_to } => {
                let item = active.state.get().cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Set {
                id,
                state,
                respond_to,
            } => {
                debug!(entity_type, %id, ?state, "Set");
                if let Err(e) = active.entity.on_set(&id, &state) {
                    warn!(entity_type, %id, error = %e, "Set rejected");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                let result = active.state.set(state).await.map_err(FrameworkError::from);
                match &result {
                    Ok(()) => info!(entity_type, %id, "Stored"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Store failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Clear { id, respond_to } => {
                debug!(entity_type, %id, "Clear");
                if let Err(e) = active.entity.on_clear(&id, context).await {
                    warn!(entity_type, %id, error = %e, "on_clear failed");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                let result = active.state.clear().await.map_err(FrameworkError::from);
                match &result {
                    Ok(()) => info!(entity_type, %id, "Cleared"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Clear failed"),
                }
                let _ = respond_to.send(result);
            }
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            } => {
                debug!(entity_type, %id, ?action, "Action");
                let result = active
                    .entity
                    .handle_action(&id, action, &mut active.state, context)
                    .await
                    .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                match &result {
                    Ok(_) => info!(entity_type, %id, "Action ok"),
                    Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                }
                let _ = respond_to.send(result);
            }
        }
    }
}
