use super::MovieKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Identity of the index grain. There is exactly one: [`MovieIndexId::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieIndexId(pub u128);

impl MovieIndexId {
    /// The reserved all-zero identity of the catalog-wide index.
    pub const EMPTY: MovieIndexId = MovieIndexId(0);
}

impl Display for MovieIndexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff
        )
    }
}

/// Key → display name for every movie the catalog enumerates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieIndex {
    #[serde(default)]
    pub index: HashMap<MovieKey, String>,
}

impl MovieIndex {
    pub fn contains(&self, key: MovieKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
