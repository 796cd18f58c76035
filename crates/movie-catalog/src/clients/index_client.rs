//! # Movie Index Client
//!
//! Provides a high‑level API for the singleton index grain. Every method targets
//! [`MovieIndexId::EMPTY`], so callers never pass an id.
use crate::index_actor::{IndexAction, IndexActionResult, IndexError, IndexGrain};
use crate::model::{Movie, MovieIndex, MovieIndexId, MovieKey};
use async_trait::async_trait;
use grain_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the index grain.
#[derive(Clone)]
pub struct MovieIndexClient {
    inner: ResourceClient<IndexGrain>,
}

impl MovieIndexClient {
    pub fn new(inner: ResourceClient<IndexGrain>) -> Self {
        Self { inner }
    }

    /// The current key → name mapping. Never absent: the first activation persists an
    /// empty record.
    #[instrument(skip(self))]
    pub async fn get_index(&self) -> Result<MovieIndex, IndexError> {
        Ok(self.get(MovieIndexId::EMPTY).await?.unwrap_or_default())
    }

    /// Replaces the whole mapping.
    #[instrument(skip(self, record), fields(size = record.len()))]
    pub async fn set_index(&self, record: MovieIndex) -> Result<(), IndexError> {
        self.set(MovieIndexId::EMPTY, record).await
    }

    /// Every indexed movie that currently has state.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Movie>, IndexError> {
        debug!("Sending request");
        match self.action(IndexAction::GetAll).await? {
            IndexActionResult::GetAll(movies) => Ok(movies),
            _ => Err(Self::map_error(FrameworkError::UnexpectedReply("GetAll"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn insert(&self, key: MovieKey, name: String) -> Result<bool, IndexError> {
        debug!("Sending request");
        match self.action(IndexAction::Insert { key, name }).await? {
            IndexActionResult::Insert(changed) => Ok(changed),
            _ => Err(Self::map_error(FrameworkError::UnexpectedReply("Insert"))),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, key: MovieKey) -> Result<bool, IndexError> {
        debug!("Sending request");
        match self.action(IndexAction::Remove(key)).await? {
            IndexActionResult::Remove(changed) => Ok(changed),
            _ => Err(Self::map_error(FrameworkError::UnexpectedReply("Remove"))),
        }
    }

    async fn action(&self, action: IndexAction) -> Result<IndexActionResult, IndexError> {
        self.inner
            .perform_action(MovieIndexId::EMPTY, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<IndexGrain> for MovieIndexClient {
    type Error = IndexError;

    fn inner(&self) -> &ResourceClient<IndexGrain> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Storage(err) | FrameworkError::Activation(err) => IndexError::Storage(err),
            other => match other.entity_error::<IndexError>() {
                Some(err) => err.clone(),
                None => IndexError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
