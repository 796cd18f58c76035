//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of by a host. It lets you test logic that sits
//! *around* a client (facades, other grains) without activating anything.
//!
//! ## When to use Mocks vs Real Hosts
//!
//! | Feature | MockClient | ActorHost |
//! |---------|------------|-----------|
//! | **Speed** | Instant (in-memory) | Fast (spawns one task per key) |
//! | **State** | None (expectations) | Real, persisted state |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing store |
//! | **Use Case** | Orchestration around the client | The grain itself or the whole system |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Counter>::new();
//! mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//! let result = mock.client().get(1).await;
//! assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! mock.verify();
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver, or use the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T::State>, FrameworkError>,
    },
    Set {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Clear {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectations poisoned")
        .push_back(expectation);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered, for the same
/// keys; anything else panics the mock task and the caller sees
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<ResourceRequest<T>>();
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let pending = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = pending
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Set { id, respond_to, .. },
                        Some(Expectation::Set { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Set for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Clear { id, respond_to },
                        Some(Expectation::Clear { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Clear for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "Action for unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!(
                            "Unexpected {} request for key {}",
                            request.operation(),
                            request.id()
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `set` operation.
    pub fn expect_set(&mut self, id: T::Id) -> UnitExpectationBuilder<T> {
        UnitExpectationBuilder {
            id,
            clear: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `clear` operation.
    pub fn expect_clear(&mut self, id: T::Id) -> UnitExpectationBuilder<T> {
        UnitExpectationBuilder {
            id,
            clear: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T::State>) {
        push(&self.expectations, Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `set` and `clear` expectations.
pub struct UnitExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    clear: bool,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> UnitExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.respond(Ok(()));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.respond(Err(error));
    }

    fn respond(self, response: Result<(), FrameworkError>) {
        let expectation = if self.clear {
            Expectation::Clear {
                id: self.id,
                response,
            }
        } else {
            Expectation::Set {
                id: self.id,
                response,
            }
        };
        push(&self.expectations, expectation);
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(&self.expectations, Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver, for tests that want to
/// inspect each request before answering it.
pub fn create_mock_client<T: ActorEntity>(
) -> (ResourceClient<T>, mpsc::UnboundedReceiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T::State>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Set request
pub async fn expect_set<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::State, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Set {
            id,
            state,
            respond_to,
        }) => Some((id, state, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::UnboundedReceiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
