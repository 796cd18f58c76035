//! Facade tests against mocked grains: every grain call the catalog makes must be
//! registered up front, so an unexpected write fails the test.

use grain_framework::mock::MockClient;
use grain_framework::{FrameworkError, StorageError};
use movie_catalog::catalog::{CatalogError, FilterOptions, MovieCatalog};
use movie_catalog::clients::{GenreClient, MovieClient, MovieIndexClient};
use movie_catalog::genre_actor::{GenreActionResult, GenreGrain};
use movie_catalog::index_actor::{IndexActionResult, IndexError, IndexGrain};
use movie_catalog::model::{Movie, MovieIndex, MovieIndexId};
use movie_catalog::movie_actor::MovieGrain;

struct Mocks {
    movies: MockClient<MovieGrain>,
    index: MockClient<IndexGrain>,
    genres: MockClient<GenreGrain>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            movies: MockClient::new(),
            index: MockClient::new(),
            genres: MockClient::new(),
        }
    }

    fn catalog(&self) -> MovieCatalog {
        MovieCatalog::new(
            MovieClient::new(self.movies.client()),
            MovieIndexClient::new(self.index.client()),
            GenreClient::new(self.genres.client()),
        )
    }

    fn verify(&self) {
        self.movies.verify();
        self.index.verify();
        self.genres.verify();
    }
}

fn indexed(entries: &[(i64, &str)]) -> MovieIndex {
    MovieIndex {
        index: entries
            .iter()
            .map(|(key, name)| (*key, name.to_string()))
            .collect(),
    }
}

#[tokio::test]
async fn test_set_writes_movie_before_indexing_it() {
    let mut mocks = Mocks::new();
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(MovieIndex::default()));
    mocks.movies.expect_set(5).return_ok();
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_ok(IndexActionResult::Insert(true));

    mocks
        .catalog()
        .set(Some(Movie::new(5, "Heat", 8.3)))
        .await
        .unwrap();

    mocks.verify();
}

#[tokio::test]
async fn test_set_of_indexed_movie_skips_the_index_write() {
    let mut mocks = Mocks::new();
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(indexed(&[(5, "Heat")])));
    mocks.movies.expect_set(5).return_ok();

    mocks
        .catalog()
        .set(Some(Movie::new(5, "Heat", 9.0)))
        .await
        .unwrap();

    mocks.verify();
}

#[tokio::test]
async fn test_failed_movie_write_is_not_indexed() {
    let mut mocks = Mocks::new();
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(MovieIndex::default()));
    mocks
        .movies
        .expect_set(5)
        .return_err(FrameworkError::Storage(StorageError::Backend("disk full".into())));

    let err = mocks
        .catalog()
        .set(Some(Movie::new(5, "Heat", 8.3)))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Dependency(_)));
    mocks.verify();
}

#[tokio::test]
async fn test_delete_with_unreachable_movie_changes_nothing() {
    let mut mocks = Mocks::new();
    mocks.movies.expect_get(3).return_err(FrameworkError::ActorClosed);
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(indexed(&[(3, "Alien")])));

    assert!(!mocks.catalog().delete(3).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_delete_with_unreachable_index_changes_nothing() {
    let mut mocks = Mocks::new();
    mocks
        .movies
        .expect_get(3)
        .return_ok(Some(Movie::new(3, "Alien", 8.5)));
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_err(FrameworkError::Timeout(std::time::Duration::from_secs(30)));

    assert!(!mocks.catalog().delete(3).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_delete_clears_movie_then_unlists_it() {
    let mut mocks = Mocks::new();
    mocks
        .movies
        .expect_get(3)
        .return_ok(Some(Movie::new(3, "Alien", 8.5)));
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(indexed(&[(3, "Alien")])));
    mocks.movies.expect_clear(3).return_ok();
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_ok(IndexActionResult::Remove(true));

    assert!(mocks.catalog().delete(3).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_delete_of_unlisted_movie_still_drops_it() {
    let mut mocks = Mocks::new();
    mocks
        .movies
        .expect_get(3)
        .return_ok(Some(Movie::new(3, "Alien", 8.5)));
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(indexed(&[])));
    mocks.movies.expect_clear(3).return_ok();
    // The index only persists a Remove for a listed key.
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_ok(IndexActionResult::Remove(false));

    assert!(mocks.catalog().delete(3).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_delete_unlists_key_listed_after_the_check() {
    let mut mocks = Mocks::new();
    mocks
        .movies
        .expect_get(3)
        .return_ok(Some(Movie::new(3, "Alien", 8.5)));
    mocks
        .index
        .expect_get(MovieIndexId::EMPTY)
        .return_ok(Some(indexed(&[])));
    mocks.movies.expect_clear(3).return_ok();
    // A concurrent set indexed the key in the meantime.
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_ok(IndexActionResult::Remove(true));

    assert!(mocks.catalog().delete(3).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_link_movie_checks_the_movie_first() {
    let mut mocks = Mocks::new();
    mocks.movies.expect_get(8).return_ok(None);
    mocks
        .movies
        .expect_get(9)
        .return_ok(Some(Movie::new(9, "Heat", 8.3)));
    mocks
        .genres
        .expect_action("crime".to_string())
        .return_ok(GenreActionResult::LinkMovie(true));

    let catalog = mocks.catalog();
    assert!(!catalog.link_movie("crime", 8).await.unwrap());
    assert!(catalog.link_movie("crime", 9).await.unwrap());

    mocks.verify();
}

#[tokio::test]
async fn test_get_all_failure_propagates() {
    let mut mocks = Mocks::new();
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_err(FrameworkError::EntityError(Box::new(IndexError::Fetch {
            key: 3,
            reason: "timed out".into(),
        })));

    let err = mocks.catalog().get_all().await.unwrap_err();

    assert_eq!(
        err,
        CatalogError::Dependency("Fetching movie 3 failed: timed out".into())
    );
    mocks.verify();
}

#[tokio::test]
async fn test_search_runs_over_get_all() {
    let mut mocks = Mocks::new();
    mocks
        .index
        .expect_action(MovieIndexId::EMPTY)
        .return_ok(IndexActionResult::GetAll(vec![
            Movie::new(1, "Heat", 8.3),
            Movie::new(2, "Alien", 8.5),
            Movie::new(3, "Heathers", 7.1),
        ]));

    let found = mocks
        .catalog()
        .search(&FilterOptions::named("heat"))
        .await
        .unwrap();

    let names: Vec<&str> = found.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Heat", "Heathers"]);
    mocks.verify();
}

#[tokio::test]
async fn test_queries_without_input_skip_the_index() {
    let mocks = Mocks::new();
    let catalog = mocks.catalog();

    assert!(catalog
        .by_genre(&FilterOptions::named(""))
        .await
        .unwrap()
        .is_empty());
    assert!(catalog.top_rated(0).await.unwrap().is_empty());
    assert!(matches!(
        catalog.set(None).await,
        Err(CatalogError::InvalidInput(_))
    ));

    mocks.verify();
}
