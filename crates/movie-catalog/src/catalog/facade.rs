use super::error::CatalogError;
use super::query::{self, FilterOptions};
use crate::clients::{GenreClient, MovieClient, MovieIndexClient};
use crate::model::{Genre, Movie, MovieKey};
use crate::movie_actor::GenreChange;
use grain_framework::ActorClient;
use tracing::{debug, info, instrument, warn};

/// The only surface an endpoint layer should call. Holds clients, no state.
#[derive(Clone)]
pub struct MovieCatalog {
    movies: MovieClient,
    index: MovieIndexClient,
    genres: GenreClient,
}

impl MovieCatalog {
    pub fn new(movies: MovieClient, index: MovieIndexClient, genres: GenreClient) -> Self {
        Self {
            movies,
            index,
            genres,
        }
    }

    /// A single movie, read straight from its grain. Unaffected by the index.
    #[instrument(skip(self))]
    pub async fn get(&self, key: MovieKey) -> Result<Option<Movie>, CatalogError> {
        Ok(self.movies.get(key).await?)
    }

    /// Every indexed movie. Fails as a whole if any movie cannot be fetched.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.index.get_all().await?)
    }

    /// Creates or replaces a movie, then makes sure the index lists it.
    ///
    /// The movie is written before the index, so a key found in the index always has
    /// state behind it. If the index write fails, the movie exists but is not
    /// enumerated until the next successful `set`.
    #[instrument(skip(self, movie), fields(key = movie.as_ref().map(|m| m.key)))]
    pub async fn set(&self, movie: Option<Movie>) -> Result<(), CatalogError> {
        let movie = movie.ok_or_else(|| CatalogError::InvalidInput("movie is required".into()))?;
        if !movie.rate.is_finite() {
            return Err(CatalogError::InvalidInput(format!(
                "rate must be finite, got {}",
                movie.rate
            )));
        }

        let index = self.index.get_index().await?;
        let (key, name) = (movie.key, movie.name.clone());
        self.movies.set(key, movie).await?;
        if !index.contains(key) {
            self.index.insert(key, name).await?;
        }
        info!(key, "Movie stored");
        Ok(())
    }

    /// Upserts movies one after another, stopping at the first failure. Returns how many
    /// were stored.
    #[instrument(skip(self, movies), fields(count = movies.len()))]
    pub async fn set_batch(&self, movies: Vec<Movie>) -> Result<usize, CatalogError> {
        let mut stored = 0;
        for movie in movies {
            self.set(Some(movie)).await?;
            stored += 1;
        }
        Ok(stored)
    }

    /// Drops a movie and unlists it.
    ///
    /// Returns `Ok(false)`, touching nothing, when the movie is absent or either the
    /// movie or the index could not be fetched.
    #[instrument(skip(self))]
    pub async fn delete(&self, key: MovieKey) -> Result<bool, CatalogError> {
        let (movie, index) = tokio::join!(self.movies.get(key), self.index.get_index());
        let index = match (movie, index) {
            (Ok(Some(_)), Ok(index)) => index,
            (Ok(None), _) => {
                debug!(key, "Nothing to delete");
                return Ok(false);
            }
            (Err(e), _) => {
                warn!(key, error = %e, "Movie unreachable, delete skipped");
                return Ok(false);
            }
            (_, Err(e)) => {
                warn!(key, error = %e, "Index unreachable, delete skipped");
                return Ok(false);
            }
        };

        self.movies.clear(key).await?;
        // Remove persists only if the key is listed now. A concurrent set may have
        // listed it after the snapshot above was taken.
        let unlisted = self.index.remove(key).await?;
        if unlisted != index.contains(key) {
            debug!(key, unlisted, "Index changed since the delete check");
        }
        info!(key, "Movie deleted");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub async fn search(&self, options: &FilterOptions) -> Result<Vec<Movie>, CatalogError> {
        Ok(query::search(self.get_all().await?, options))
    }

    #[instrument(skip(self))]
    pub async fn by_genre(&self, options: &FilterOptions) -> Result<Vec<Movie>, CatalogError> {
        if matches!(options.name.as_deref(), None | Some("")) {
            return Ok(Vec::new());
        }
        Ok(query::by_genre(self.get_all().await?, options))
    }

    #[instrument(skip(self))]
    pub async fn top_rated(&self, limit: usize) -> Result<Vec<Movie>, CatalogError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(query::top_rated(self.get_all().await?, limit))
    }

    /// Adds a registered genre to a movie. Skipped, not failed, when either side is
    /// missing.
    #[instrument(skip(self))]
    pub async fn add_genre(&self, key: MovieKey, genre: &str) -> Result<GenreChange, CatalogError> {
        Ok(self.movies.add_genre(key, genre.to_string()).await?)
    }

    #[instrument(skip(self))]
    pub async fn remove_genre(
        &self,
        key: MovieKey,
        genre: &str,
    ) -> Result<GenreChange, CatalogError> {
        Ok(self.movies.remove_genre(key, genre.to_string()).await?)
    }

    /// Stores genre metadata so movies may carry the genre.
    #[instrument(skip(self))]
    pub async fn register_genre(&self, name: &str) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::InvalidInput("genre name is required".into()));
        }
        self.genres.set(name.to_string(), Genre::new(name)).await?;
        info!(genre = name, "Genre registered");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn genre(&self, name: &str) -> Result<Option<Genre>, CatalogError> {
        Ok(self.genres.get(name.to_string()).await?)
    }

    /// Records an advisory genre → movie link. Returns whether the movie existed.
    ///
    /// The movie is checked here, outside any grain turn, so the genre grain never waits
    /// on a movie grain.
    #[instrument(skip(self))]
    pub async fn link_movie(&self, genre: &str, key: MovieKey) -> Result<bool, CatalogError> {
        if self.movies.get(key).await?.is_none() {
            debug!(genre, key, "Link skipped, movie absent");
            return Ok(false);
        }
        self.genres.link_movie(genre.to_string(), key).await?;
        Ok(true)
    }

    /// Always fails with [`CatalogError::Unsupported`].
    #[instrument(skip(self))]
    pub async fn unlink_movie(&self, genre: &str, key: MovieKey) -> Result<(), CatalogError> {
        Ok(self.genres.unlink_movie(genre.to_string(), key).await?)
    }

    #[instrument(skip(self))]
    pub async fn linked_movies(&self, genre: &str) -> Result<Vec<MovieKey>, CatalogError> {
        Ok(self.genres.linked_movies(genre.to_string()).await?)
    }

    /// Activates every indexed movie so first reads after startup are served warm.
    /// Returns how many movies were loaded.
    #[instrument(skip(self))]
    pub async fn warm_up(&self) -> Result<usize, CatalogError> {
        let loaded = self.get_all().await?.len();
        info!(loaded, "Catalog warmed up");
        Ok(loaded)
    }
}
