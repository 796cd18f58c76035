//! Domain data types.
//!
//! Everything here is plain serde data. Which grain owns which type:
//!
//! | Type | Owner | Key |
//! |------|-------|-----|
//! | [`Movie`] | [`movie_actor`](crate::movie_actor) | [`MovieKey`] |
//! | [`MovieIndex`] | [`index_actor`](crate::index_actor) | [`MovieIndexId::EMPTY`] |
//! | [`Genre`] | [`genre_actor`](crate::genre_actor) | genre name |

pub mod genre;
pub mod movie;
pub mod movie_index;

pub use genre::*;
pub use movie::*;
pub use movie_index::*;
