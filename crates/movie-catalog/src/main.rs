//! # Movie Catalog
//!
//! Starts the catalog on the configured store, warms it up and, with `--seed`, loads a
//! handful of sample movies and prints a few queries over them.
//!
//! ```bash
//! RUST_LOG=info cargo run -p movie-catalog -- --seed
//! MOVIES_STORE_DIR=./data RUST_LOG=debug cargo run -p movie-catalog
//! ```

use clap::Parser;
use grain_framework::tracing::setup_tracing;
use movie_catalog::catalog::FilterOptions;
use movie_catalog::lifecycle::{CatalogConfig, CatalogSystem};
use movie_catalog::model::Movie;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "movie-catalog", about = "Movie catalog on virtual actors")]
struct Cli {
    /// Directory for persisted grain state. Kept in memory when unset.
    #[arg(long, env = "MOVIES_STORE_DIR")]
    store_dir: Option<PathBuf>,

    /// Seconds an activation may stay idle before it is deactivated.
    #[arg(long, env = "MOVIES_IDLE_TIMEOUT_SECS", default_value_t = 600)]
    idle_timeout_secs: u64,

    /// Seconds a caller waits for a grain reply.
    #[arg(long, env = "MOVIES_CALL_TIMEOUT_SECS", default_value_t = 30)]
    call_timeout_secs: u64,

    /// Load sample movies and run a few queries.
    #[arg(long)]
    seed: bool,
}

impl From<&Cli> for CatalogConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            store_dir: cli.store_dir.clone(),
            idle_timeout: Duration::from_secs(cli.idle_timeout_secs),
            call_timeout: Duration::from_secs(cli.call_timeout_secs),
        }
    }
}

fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new(1, "Alien", 8.5)
            .with_genres(["horror", "sci-fi"])
            .with_length("1h 57min"),
        Movie::new(2, "Heat", 8.3).with_genres(["crime"]),
        Movie::new(3, "Arrival", 7.9)
            .with_genres(["sci-fi"])
            .with_description("Linguist meets heptapods."),
        Movie::new(4, "Paddington 2", 7.8),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let config = CatalogConfig::from(&cli);
    info!(?config, "Starting movie catalog");
    let system = CatalogSystem::new(&config);

    match system.catalog.warm_up().await {
        Ok(loaded) => info!(loaded, "Catalog ready"),
        Err(e) => error!(error = %e, "Warm-up failed"),
    }

    if cli.seed {
        let span = tracing::info_span!("seed");
        let seeded = async {
            for genre in ["crime", "horror", "sci-fi"] {
                system.catalog.register_genre(genre).await?;
            }
            let stored = system.catalog.set_batch(sample_movies()).await?;
            let change = system.catalog.add_genre(4, "comedy").await?;
            info!(stored, ?change, "Sample movies stored");
            Ok::<_, movie_catalog::catalog::CatalogError>(())
        }
        .instrument(span)
        .await;

        match seeded {
            Ok(()) => {
                let top = system.catalog.top_rated(2).await.map_err(|e| e.to_string())?;
                let found = system
                    .catalog
                    .search(&FilterOptions::named("a"))
                    .await
                    .map_err(|e| e.to_string())?;
                let sci_fi = system
                    .catalog
                    .by_genre(&FilterOptions::named("sci-fi"))
                    .await
                    .map_err(|e| e.to_string())?;
                info!(
                    top = %serde_json::to_string(&top).map_err(|e| e.to_string())?,
                    "Top rated"
                );
                info!(matches = found.len(), "Search for \"a\"");
                info!(matches = sci_fi.len(), "Sci-fi movies");
            }
            Err(e) => error!(error = %e, "Seeding failed"),
        }
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Movie catalog stopped");
    Ok(())
}
