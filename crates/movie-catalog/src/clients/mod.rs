//! Typed clients, one per grain type.
//!
//! Each wraps a [`ResourceClient`](grain_framework::ResourceClient), inherits
//! `get`/`set`/`clear` from [`ActorClient`](grain_framework::ActorClient) and maps
//! framework failures into the grain's own error type. A domain error raised inside
//! the grain comes back as itself, not as a communication error.

pub mod genre_client;
pub mod index_client;
pub mod movie_client;

pub use genre_client::GenreClient;
pub use index_client::MovieIndexClient;
pub use movie_client::MovieClient;
