//! # Actor Host
//!
//! The `ActorHost<T>` owns the activation table for one grain type. Every key that has
//! received a request and has not yet gone idle maps to exactly one [`ResourceActor`] task;
//! the host creates those tasks on demand and tears them all down on shutdown.
//!
//! ## Routing
//!
//! A request is enqueued while the table entry for its key is locked. Idle eviction takes
//! the same lock and only removes the entry if the inbox is still empty, so a request can
//! never land in the inbox of an activation that has already decided to stop.
//!
//! ## Late-bound Context
//!
//! Hosts are created first and receive their [`ActorEntity::Context`] later, in
//! [`ActorHost::run`]. Activations started before that point wait for the context before
//! handling anything. This lets two grain types hold clients to each other.

use crate::actor::ResourceActor;
use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::options::RuntimeOptions;
use crate::storage::StateStore;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch, Notify};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub(crate) struct ActivationHandle<T: ActorEntity> {
    generation: u64,
    sender: mpsc::UnboundedSender<ResourceRequest<T>>,
    task: JoinHandle<()>,
}

/// State shared by the host, its clients and its activations.
pub(crate) struct HostShared<T: ActorEntity> {
    activations: DashMap<T::Id, ActivationHandle<T>>,
    pub(crate) store: Arc<dyn StateStore>,
    pub(crate) options: RuntimeOptions,
    context: watch::Sender<Option<Arc<T::Context>>>,
    next_generation: AtomicU64,
    closed: AtomicBool,
    shutdown: Notify,
}

impl<T: ActorEntity> HostShared<T> {
    /// Routes `request` to the activation for its key, starting one if needed.
    pub(crate) fn dispatch(self: &Arc<Self>, request: ResourceRequest<T>) -> Result<(), FrameworkError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(FrameworkError::ActorClosed);
        }
        let id = request.id().clone();
        match self.activations.entry(id.clone()) {
            Entry::Occupied(mut slot) => {
                if let Err(mpsc::error::SendError(request)) = slot.get().sender.send(request) {
                    // The task ended without deregistering (it panicked).
                    warn!(entity_type = T::KIND, %id, "Replacing dead activation");
                    let handle = self.spawn_activation(id);
                    handle
                        .sender
                        .send(request)
                        .map_err(|_| FrameworkError::ActorClosed)?;
                    slot.insert(handle);
                }
            }
            Entry::Vacant(slot) => {
                let handle = self.spawn_activation(id);
                handle
                    .sender
                    .send(request)
                    .map_err(|_| FrameworkError::ActorClosed)?;
                slot.insert(handle);
            }
        }
        Ok(())
    }

    fn spawn_activation(self: &Arc<Self>, id: T::Id) -> ActivationHandle<T> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();
        debug!(entity_type = T::KIND, %id, generation, "Spawning activation");
        let actor = ResourceActor::new(id, generation, receiver, Arc::clone(self));
        let task = tokio::spawn(actor.run());
        ActivationHandle {
            generation,
            sender,
            task,
        }
    }

    /// Called by an idle activation. Returns `true` when the activation must exit: either
    /// it was removed from the table just now, or it is no longer the registered one and
    /// has nothing left to serve.
    pub(crate) fn try_evict(
        &self,
        id: &T::Id,
        generation: u64,
        receiver: &mpsc::UnboundedReceiver<ResourceRequest<T>>,
    ) -> bool {
        let removed = self
            .activations
            .remove_if(id, |_, handle| handle.generation == generation && receiver.is_empty());
        if removed.is_some() {
            return true;
        }
        let registered = self
            .activations
            .get(id)
            .is_some_and(|handle| handle.generation == generation);
        !registered && receiver.is_empty()
    }

    /// Resolves once [`ActorHost::run`] has bound the context.
    pub(crate) async fn wait_for_context(&self) -> Option<Arc<T::Context>> {
        let mut receiver = self.context.subscribe();
        let bound = receiver.wait_for(Option::is_some).await.ok()?;
        bound.clone()
    }

    pub(crate) fn active_count(&self) -> usize {
        self.activations.len()
    }

    pub(crate) fn request_shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Hosts every activation of grain type `T`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ActorHost::new(store, options)` returns the host and a client.
/// 2.  **Wire**: hand clones of the client to whatever depends on `T`.
/// 3.  **Run**: spawn `host.run(context)`; it returns after [`ResourceClient::shutdown`].
pub struct ActorHost<T: ActorEntity> {
    shared: Arc<HostShared<T>>,
}

impl<T: ActorEntity> ActorHost<T> {
    pub fn new(store: Arc<dyn StateStore>, options: RuntimeOptions) -> (Self, ResourceClient<T>) {
        let (context, _) = watch::channel(None);
        let shared = Arc::new(HostShared {
            activations: DashMap::new(),
            store,
            options,
            context,
            next_generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            shutdown: Notify::new(),
        });
        let client = ResourceClient::hosted(Arc::clone(&shared));
        (Self { shared }, client)
    }

    /// Binds `context`, then serves until shutdown is requested.
    ///
    /// On shutdown new requests are refused with [`FrameworkError::ActorClosed`]; every
    /// activation finishes the requests already in its inbox and is deactivated before
    /// this returns.
    pub async fn run(self, context: T::Context) {
        let entity_type = T::KIND;
        self.shared.context.send_replace(Some(Arc::new(context)));
        info!(entity_type, "Host started");

        self.shared.shutdown.notified().await;
        self.shared.closed.store(true, Ordering::Release);

        let mut stopped = 0usize;
        loop {
            let ids: Vec<T::Id> = self
                .shared
                .activations
                .iter()
                .map(|entry| entry.key().clone())
                .collect();
            if ids.is_empty() {
                break;
            }
            for id in ids {
                let Some((_, handle)) = self.shared.activations.remove(&id) else {
                    continue;
                };
                drop(handle.sender);
                if let Err(e) = handle.task.await {
                    warn!(entity_type, %id, error = %e, "Activation task failed");
                }
                stopped += 1;
            }
        }

        // Contexts may hold clients of other hosts; release them.
        self.shared.context.send_replace(None);
        info!(entity_type, stopped, "Shutdown");
    }
}
