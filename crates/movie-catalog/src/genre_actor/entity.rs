//! [`ActorEntity`] implementation for genre grains.
//!
//! The link set is kept in memory only and starts empty on every activation. The
//! authoritative genre membership is each movie's own `genres` set.
//!
//! Movie grains ask genre grains whether a genre is registered, so a genre grain never
//! calls back into movies. Whether a linked movie exists is checked by the caller.

use super::actions::{GenreAction, GenreActionResult};
use super::error::GenreError;
use crate::model::{Genre, MovieKey};
use async_trait::async_trait;
use grain_framework::{ActorEntity, DeactivationReason, PersistentState};
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct GenreGrain {
    linked: BTreeSet<MovieKey>,
}

#[async_trait]
impl ActorEntity for GenreGrain {
    type Id = String;
    type State = Genre;
    type Action = GenreAction;
    type ActionResult = GenreActionResult;
    type Context = ();
    type Error = GenreError;

    const KIND: &'static str = "genre";

    fn new_activation(_id: &String) -> Self {
        Self::default()
    }

    async fn on_deactivate(&mut self, id: &String, reason: DeactivationReason) {
        if !self.linked.is_empty() {
            debug!(genre = %id, ?reason, dropped_links = self.linked.len(), "Link set discarded");
        }
    }

    async fn handle_action(
        &mut self,
        id: &String,
        action: GenreAction,
        _state: &mut PersistentState<Genre>,
        _ctx: &(),
    ) -> Result<GenreActionResult, GenreError> {
        match action {
            GenreAction::LinkMovie(key) => {
                let added = self.linked.insert(key);
                if added {
                    info!(genre = %id, key, "Movie linked");
                } else {
                    debug!(genre = %id, key, "Movie already linked");
                }
                Ok(GenreActionResult::LinkMovie(added))
            }
            GenreAction::UnlinkMovie(_) => Err(GenreError::Unsupported("UnlinkMovie")),
            GenreAction::LinkedMovies => Ok(GenreActionResult::LinkedMovies(
                self.linked.iter().copied().collect(),
            )),
        }
    }
}
