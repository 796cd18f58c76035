//! # Generic Client
//!
//! This module defines the generic client for communicating with grains. A
//! `ResourceClient<T>` addresses grains by key; it never holds a reference to an
//! activation, so a key may be deactivated and reactivated between two calls without
//! the caller noticing.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::host::HostShared;
use crate::message::ResourceRequest;
use crate::options::RuntimeOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

enum Route<T: ActorEntity> {
    Host(Arc<HostShared<T>>),
    Channel(mpsc::UnboundedSender<ResourceRequest<T>>),
}

pub struct ResourceClient<T: ActorEntity> {
    route: Route<T>,
    call_timeout: Duration,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        let route = match &self.route {
            Route::Host(shared) => Route::Host(Arc::clone(shared)),
            Route::Channel(sender) => Route::Channel(sender.clone()),
        };
        Self {
            route,
            call_timeout: self.call_timeout,
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    /// A client that delivers every request to one channel instead of a host. Used by
    /// [`MockClient`](crate::mock::MockClient).
    pub fn new(sender: mpsc::UnboundedSender<ResourceRequest<T>>) -> Self {
        Self {
            route: Route::Channel(sender),
            call_timeout: RuntimeOptions::default().call_timeout,
        }
    }

    pub(crate) fn hosted(shared: Arc<HostShared<T>>) -> Self {
        let call_timeout = shared.options.call_timeout;
        Self {
            route: Route::Host(shared),
            call_timeout,
        }
    }

    fn send(&self, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        match &self.route {
            Route::Host(shared) => shared.dispatch(request),
            Route::Channel(sender) => sender.send(request).map_err(|_| FrameworkError::ActorClosed),
        }
    }

    async fn call<R>(
        &self,
        request: ResourceRequest<T>,
        response: oneshot::Receiver<Result<R, FrameworkError>>,
    ) -> Result<R, FrameworkError> {
        self.send(request)?;
        match tokio::time::timeout(self.call_timeout, response).await {
            Ok(reply) => reply.map_err(|_| FrameworkError::ActorDropped)?,
            Err(_) => Err(FrameworkError::Timeout(self.call_timeout)),
        }
    }

    /// The grain's state, `None` if it was never set or has been cleared.
    pub async fn get(&self, id: T::Id) -> Result<Option<T::State>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    /// Replaces the grain's state. Returns once the new state is persisted.
    pub async fn set(&self, id: T::Id, state: T::State) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.call(
            ResourceRequest::Set {
                id,
                state,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Removes the grain's stored state.
    pub async fn clear(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::Clear { id, respond_to }, response)
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.call(
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            response,
        )
        .await
    }

    /// Asks the host to stop. [`ActorHost::run`](crate::ActorHost::run) returns once every
    /// activation has drained. No-op for channel clients.
    pub fn shutdown(&self) {
        if let Route::Host(shared) = &self.route {
            shared.request_shutdown();
        }
    }

    /// Number of keys currently activated. Always `0` for channel clients.
    pub fn active_count(&self) -> usize {
        match &self.route {
            Route::Host(shared) => shared.active_count(),
            Route::Channel(_) => 0,
        }
    }
}
