//! In-memory catalog queries over a fetched movie list.
//!
//! These run on the result of an index `GetAll`; there is no secondary index.

use crate::model::Movie;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Paging, sorting and name filter for [`search`] and [`by_genre`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Maximum number of results; `0` means no limit.
    pub limit: usize,
    pub offset: usize,
    /// Movie name fragment for [`search`], genre name for [`by_genre`].
    pub name: Option<String>,
    pub sort_ascending: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            name: None,
            sort_ascending: true,
        }
    }
}

impl FilterOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    fn name_filter(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
    }
}

/// Movies whose name contains `options.name` (case-insensitive), or all movies when no
/// name is given; sorted by name, then paged.
pub fn search(movies: Vec<Movie>, options: &FilterOptions) -> Vec<Movie> {
    let matched = match options.name_filter() {
        Some(needle) => movies
            .into_iter()
            .filter(|m| !m.name.is_empty() && m.name.to_lowercase().contains(&needle))
            .collect(),
        None => movies,
    };
    sort_and_page(matched, options)
}

/// Movies carrying a genre matching `options.name` (case-insensitive); sorted by name,
/// then paged. Without a genre name the result is empty.
pub fn by_genre(movies: Vec<Movie>, options: &FilterOptions) -> Vec<Movie> {
    let Some(genre) = options.name_filter() else {
        return Vec::new();
    };
    let matched = movies
        .into_iter()
        .filter(|m| m.genres.iter().any(|g| g.to_lowercase() == genre))
        .collect();
    sort_and_page(matched, options)
}

/// The `limit` best-rated movies, best first.
pub fn top_rated(mut movies: Vec<Movie>, limit: usize) -> Vec<Movie> {
    if limit == 0 {
        return Vec::new();
    }
    movies.sort_by(|a, b| b.rate.total_cmp(&a.rate).then(a.key.cmp(&b.key)));
    movies.truncate(limit);
    movies
}

fn by_name(a: &Movie, b: &Movie) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then(a.key.cmp(&b.key))
}

fn sort_and_page(mut movies: Vec<Movie>, options: &FilterOptions) -> Vec<Movie> {
    if options.sort_ascending {
        movies.sort_by(by_name);
    } else {
        movies.sort_by(|a, b| by_name(b, a));
    }
    let paged = movies.into_iter().skip(options.offset);
    if options.limit > 0 {
        paged.take(options.limit).collect()
    } else {
        paged.collect()
    }
}
