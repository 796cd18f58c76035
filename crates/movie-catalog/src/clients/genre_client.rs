//! # Genre Client
//!
//! Provides a high‑level API for interacting with genre grains.
use crate::genre_actor::{GenreAction, GenreActionResult, GenreError, GenreGrain};
use crate::model::MovieKey;
use async_trait::async_trait;
use grain_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with genre grains.
#[derive(Clone)]
pub struct GenreClient {
    inner: ResourceClient<GenreGrain>,
}

impl GenreClient {
    pub fn new(inner: ResourceClient<GenreGrain>) -> Self {
        Self { inner }
    }

    /// Adds `key` to the genre's link set. Returns whether it was newly added.
    #[instrument(skip(self))]
    pub async fn link_movie(&self, genre: String, key: MovieKey) -> Result<bool, GenreError> {
        debug!("Sending request");
        match self.action(genre, GenreAction::LinkMovie(key)).await? {
            GenreActionResult::LinkMovie(added) => Ok(added),
            _ => Err(Self::map_error(FrameworkError::UnexpectedReply("LinkMovie"))),
        }
    }

    /// Always fails with [`GenreError::Unsupported`].
    #[instrument(skip(self))]
    pub async fn unlink_movie(&self, genre: String, key: MovieKey) -> Result<(), GenreError> {
        debug!("Sending request");
        self.action(genre, GenreAction::UnlinkMovie(key)).await?;
        Err(Self::map_error(FrameworkError::UnexpectedReply("UnlinkMovie")))
    }

    #[instrument(skip(self))]
    pub async fn linked_movies(&self, genre: String) -> Result<Vec<MovieKey>, GenreError> {
        debug!("Sending request");
        match self.action(genre, GenreAction::LinkedMovies).await? {
            GenreActionResult::LinkedMovies(keys) => Ok(keys),
            _ => Err(Self::map_error(FrameworkError::UnexpectedReply("LinkedMovies"))),
        }
    }

    async fn action(&self, genre: String, action: GenreAction) -> Result<GenreActionResult, GenreError> {
        self.inner
            .perform_action(genre, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<GenreGrain> for GenreClient {
    type Error = GenreError;

    fn inner(&self) -> &ResourceClient<GenreGrain> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Storage(err) | FrameworkError::Activation(err) => GenreError::Storage(err),
            other => match other.entity_error::<GenreError>() {
                Some(err) => err.clone(),
                None => GenreError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
