use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Caller-assigned identity of a movie. Never changes once the movie exists.
pub type MovieKey = i64;

/// A catalog entry, owned by the movie grain with the same [`MovieKey`].
///
/// # Wire Shape
/// Serialized as `{"key", "name", "genres", "rate", "description", "length", "img"}`.
/// `genres`, `description`, `length` and `img` may be omitted and default to empty;
/// duplicate genres collapse into one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub key: MovieKey,
    pub name: String,
    #[serde(default)]
    pub genres: BTreeSet<String>,
    pub rate: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub img: String,
}

impl Movie {
    /// Creates a movie with no genres and empty descriptive fields.
    pub fn new(key: MovieKey, name: impl Into<String>, rate: f64) -> Self {
        Self {
            key,
            name: name.into(),
            genres: BTreeSet::new(),
            rate,
            description: String::new(),
            length: String::new(),
            img: String::new(),
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }
}
