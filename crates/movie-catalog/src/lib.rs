//! # Movie Catalog
//!
//! A movie catalog built on [`grain_framework`]. Each movie, the catalog-wide index and
//! each genre is a grain: a keyed, single-writer actor whose state is persisted and
//! reloaded on demand.
//!
//! - [`model`] - plain serde data ([`Movie`](model::Movie), [`MovieIndex`](model::MovieIndex), [`Genre`](model::Genre))
//! - [`movie_actor`], [`index_actor`], [`genre_actor`] - the grain types
//! - [`clients`] - typed clients per grain
//! - [`catalog`] - the [`MovieCatalog`](catalog::MovieCatalog) facade and queries
//! - [`lifecycle`] - [`CatalogSystem`](lifecycle::CatalogSystem) wiring and config

pub mod catalog;
pub mod clients;
pub mod genre_actor;
pub mod index_actor;
pub mod lifecycle;
pub mod model;
pub mod movie_actor;
