//! # Catalog Facade
//!
//! [`MovieCatalog`] orchestrates the three grain types. It is where cross-grain
//! consistency is enforced:
//!
//! - **set**: validate locally, fetch the index, write the movie, then list it in the
//!   index if it was not listed yet.
//! - **delete**: fetch the movie and the index concurrently; only when both fetches
//!   succeed and the movie exists, drop it and unlist it (if listed).
//! - **get** goes straight to the movie grain; **get_all** and the [`query`] helpers go
//!   through the index.
//!
//! There is no atomicity across grains. A failure between the movie write and the
//! index write leaves a stored but unlisted movie, which the next `set` repairs.

pub mod error;
pub mod facade;
pub mod query;

pub use error::CatalogError;
pub use facade::MovieCatalog;
pub use query::FilterOptions;
