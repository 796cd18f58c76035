use super::config::CatalogConfig;
use crate::catalog::{CatalogError, MovieCatalog};
use crate::clients::{GenreClient, MovieClient, MovieIndexClient};
use crate::{genre_actor, index_actor, movie_actor};
use grain_framework::{ActorClient, RuntimeOptions, StateStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator of the movie catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the three grain hosts
/// - **Dependency Wiring**: Movie → Genre (registration guard), Index → Movie (fan-out).
///   Genre grains depend on nothing, so no grain ever waits on a grain waiting on it.
/// - **Facade**: building the [`MovieCatalog`] over the three clients
///
/// Every host is created first and receives its context only when spawned, so the
/// order in which hosts are built does not matter.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
/// system.catalog.set(Some(Movie::new(1, "Alien", 8.5))).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub catalog: MovieCatalog,
    pub movie_client: MovieClient,
    pub index_client: MovieIndexClient,
    pub genre_client: GenreClient,

    /// Task handles for the host loops (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts a system on the store selected by `config`.
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_store(config.open_store(), config.runtime_options())
    }

    /// Starts a system on an explicit store. Two systems started on the same store in
    /// sequence see the same catalog.
    pub fn with_store(store: Arc<dyn StateStore>, options: RuntimeOptions) -> Self {
        // 1. Create hosts (no dependencies yet)
        let (movie_host, movie_client) = movie_actor::new(store.clone(), options.clone());
        let (index_host, index_client) = index_actor::new(store.clone(), options.clone());
        let (genre_host, genre_client) = genre_actor::new(store, options);

        // 2. Start hosts with injected context
        let movie_handle = tokio::spawn(movie_host.run(genre_client.clone()));
        let index_handle = tokio::spawn(index_host.run(movie_client.clone()));
        let genre_handle = tokio::spawn(genre_host.run(()));

        let catalog = MovieCatalog::new(
            movie_client.clone(),
            index_client.clone(),
            genre_client.clone(),
        );
        info!("Catalog system started");

        Self {
            catalog,
            movie_client,
            index_client,
            genre_client,
            handles: vec![movie_handle, index_handle, genre_handle],
        }
    }

    /// Stops every host and waits until all activations have drained.
    ///
    /// Hosts hold clients of other hosts, so dropping clients would never close them;
    /// each host is told to stop explicitly instead.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog system...");

        self.index_client.inner().shutdown();
        self.genre_client.inner().shutdown();
        self.movie_client.inner().shutdown();

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Host task failed");
                return Err(CatalogError::Dependency(format!("host task failed: {e}")));
            }
        }

        info!("Catalog system shutdown complete");
        Ok(())
    }
}
