//! [`ActorEntity`] implementation for the index grain.
//!
//! `Insert` and `Remove` edit the record inside the index's own turn. Two catalog
//! writers that each fetched the index and then wrote a whole new record back could
//! otherwise overwrite each other's additions.

use super::actions::{IndexAction, IndexActionResult};
use super::error::IndexError;
use crate::clients::MovieClient;
use crate::model::{Movie, MovieIndex, MovieIndexId};
use async_trait::async_trait;
use futures::future::try_join_all;
use grain_framework::{ActorClient, ActorEntity, PersistentState};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct IndexGrain;

impl IndexGrain {
    async fn get_all(index: &MovieIndex, movies: &MovieClient) -> Result<Vec<Movie>, IndexError> {
        let fetches = index.index.keys().map(|&key| async move {
            let fetched = movies.get(key).await.map_err(|e| IndexError::Fetch {
                key,
                reason: e.to_string(),
            })?;
            if fetched.is_none() {
                warn!(key, "Indexed movie has no state");
            }
            Ok::<_, IndexError>(fetched)
        });
        let fetched = try_join_all(fetches).await?;
        Ok(fetched.into_iter().flatten().collect())
    }
}

#[async_trait]
impl ActorEntity for IndexGrain {
    type Id = MovieIndexId;
    type State = MovieIndex;
    type Action = IndexAction;
    type ActionResult = IndexActionResult;
    type Context = MovieClient;
    type Error = IndexError;

    const KIND: &'static str = "movie-index";

    fn new_activation(_id: &MovieIndexId) -> Self {
        IndexGrain
    }

    async fn on_activate(
        &mut self,
        id: &MovieIndexId,
        state: &mut PersistentState<MovieIndex>,
        _movies: &MovieClient,
    ) -> Result<(), IndexError> {
        if !state.exists() {
            state.set(MovieIndex::default()).await?;
            info!(%id, "Initialized empty index");
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _id: &MovieIndexId,
        action: IndexAction,
        state: &mut PersistentState<MovieIndex>,
        movies: &MovieClient,
    ) -> Result<IndexActionResult, IndexError> {
        let mut record = state.get().cloned().unwrap_or_default();
        match action {
            IndexAction::GetAll => {
                let found = Self::get_all(&record, movies).await?;
                debug!(indexed = record.len(), found = found.len(), "GetAll");
                Ok(IndexActionResult::GetAll(found))
            }
            IndexAction::Insert { key, name } => {
                if record.contains(key) {
                    return Ok(IndexActionResult::Insert(false));
                }
                record.index.insert(key, name);
                state.set(record).await?;
                info!(key, "Indexed");
                Ok(IndexActionResult::Insert(true))
            }
            IndexAction::Remove(key) => {
                if record.index.remove(&key).is_none() {
                    return Ok(IndexActionResult::Remove(false));
                }
                state.set(record).await?;
                info!(key, "Unindexed");
                Ok(IndexActionResult::Remove(true))
            }
        }
    }
}
