//! # ActorClient Trait
//!
//! Provides a common interface for grain-specific clients, adding default `get`, `set`
//! and `clear` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for grain-specific clients to inherit the standard state operations.
///
/// Implementors supply [`ActorClient::inner`] and [`ActorClient::map_error`]; everything
/// else comes for free and is traced with the key as a span field.
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct CounterClient {
///     inner: ResourceClient<Counter>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Counter> for CounterClient {
///     type Error = CounterError;
///
///     fn inner(&self) -> &ResourceClient<Counter> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         CounterError::ActorCommunicationError(e.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The grain-specific error type.
    type Error: Send;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific grain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a grain's state by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T::State>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Replace a grain's state.
    #[tracing::instrument(skip(self, state))]
    async fn set(&self, id: T::Id, state: T::State) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().set(id, state).await.map_err(Self::map_error)
    }

    /// Clear a grain's state.
    #[tracing::instrument(skip(self))]
    async fn clear(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().clear(id).await.map_err(Self::map_error)
    }
}
