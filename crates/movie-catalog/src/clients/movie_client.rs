//! # Movie Client
//!
//! Provides a high‑level API for interacting with movie grains.
//! It wraps a `ResourceClient<MovieGrain>` and exposes the genre edits.
use crate::model::MovieKey;
use crate::movie_actor::{GenreChange, MovieAction, MovieError, MovieGrain};
use async_trait::async_trait;
use grain_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with movie grains.
#[derive(Clone)]
pub struct MovieClient {
    inner: ResourceClient<MovieGrain>,
}

impl MovieClient {
    pub fn new(inner: ResourceClient<MovieGrain>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_genre(&self, key: MovieKey, genre: String) -> Result<GenreChange, MovieError> {
        debug!("Sending request");
        self.inner
            .perform_action(key, MovieAction::AddGenre(genre))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn remove_genre(
        &self,
        key: MovieKey,
        genre: String,
    ) -> Result<GenreChange, MovieError> {
        debug!("Sending request");
        self.inner
            .perform_action(key, MovieAction::RemoveGenre(genre))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MovieGrain> for MovieClient {
    type Error = MovieError;

    fn inner(&self) -> &ResourceClient<MovieGrain> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Storage(err) | FrameworkError::Activation(err) => MovieError::Storage(err),
            other => match other.entity_error::<MovieError>() {
                Some(err) => err.clone(),
                None => MovieError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
