//! [`ActorEntity`] implementation for movie grains.

use super::actions::{GenreChange, MovieAction, SkipReason};
use super::error::MovieError;
use crate::clients::GenreClient;
use crate::model::{Movie, MovieKey};
use async_trait::async_trait;
use grain_framework::{ActorClient, ActorEntity, PersistentState};
use tracing::{debug, info};

/// The transient half of a movie activation. All durable data lives in [`Movie`].
#[derive(Debug)]
pub struct MovieGrain;

impl MovieGrain {
    async fn genre_registered(&self, genres: &GenreClient, name: &str) -> Result<bool, MovieError> {
        let genre = genres
            .get(name.to_string())
            .await
            .map_err(|e| MovieError::GenreLookup(e.to_string()))?;
        Ok(genre.is_some_and(|g| g.is_registered()))
    }
}

#[async_trait]
impl ActorEntity for MovieGrain {
    type Id = MovieKey;
    type State = Movie;
    type Action = MovieAction;
    type ActionResult = GenreChange;
    type Context = GenreClient;
    type Error = MovieError;

    const KIND: &'static str = "movie";

    fn new_activation(_id: &MovieKey) -> Self {
        MovieGrain
    }

    fn on_set(&self, id: &MovieKey, movie: &Movie) -> Result<(), MovieError> {
        if movie.key != *id {
            return Err(MovieError::KeyMismatch {
                expected: *id,
                actual: movie.key,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        id: &MovieKey,
        action: MovieAction,
        state: &mut PersistentState<Movie>,
        genres: &GenreClient,
    ) -> Result<GenreChange, MovieError> {
        let Some(mut movie) = state.get().cloned() else {
            debug!(key = %id, ?action, "Movie absent, genre edit skipped");
            return Ok(GenreChange::Skipped(SkipReason::MovieAbsent));
        };

        let name = match &action {
            MovieAction::AddGenre(name) | MovieAction::RemoveGenre(name) => name.as_str(),
        };
        if !self.genre_registered(genres, name).await? {
            debug!(key = %id, genre = name, "Genre not registered, genre edit skipped");
            return Ok(GenreChange::Skipped(SkipReason::GenreUnregistered));
        }

        match &action {
            MovieAction::AddGenre(name) => {
                movie.genres.insert(name.clone());
            }
            MovieAction::RemoveGenre(name) => {
                movie.genres.remove(name);
            }
        }
        state.set(movie).await?;
        info!(key = %id, ?action, "Genres updated");
        Ok(GenreChange::Applied)
    }
}
