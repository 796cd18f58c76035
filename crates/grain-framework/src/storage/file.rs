//! File-backed storage: one file per `(kind, key)`.
//!
//! Layout: `<root>/<kind>/<encoded key>.json`. Writes go to a temporary file
//! in the same directory and are renamed into place, so a crash mid-write
//! never leaves a truncated record behind.

use super::{StateStore, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Durable store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. Directories are created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, kind: &str, key: &str) -> PathBuf {
        self.root
            .join(encode_component(kind))
            .join(format!("{}.json", encode_component(key)))
    }
}

/// Keeps ASCII alphanumerics, `-` and `_`; everything else becomes `%XX` per byte.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    if out.is_empty() {
        out.push('%');
    }
    out
}

#[async_trait]
impl StateStore for FileStore {
    async fn load(&self, kind: &str, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(kind, key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, kind: &str, key: &str, blob: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(kind, key);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, blob).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn clear(&self, kind: &str, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(kind, key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("42"), "42");
        assert_eq!(encode_component("-7"), "-7");
        assert_eq!(encode_component("film noir"), "film%20noir");
        assert_eq!(encode_component("a/b"), "a%2Fb");
        assert_eq!(encode_component(""), "%");
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.load("movie", "1").await.unwrap(), None);

        store.save("movie", "1", b"{\"a\":1}".to_vec()).await.unwrap();
        assert_eq!(
            store.load("movie", "1").await.unwrap(),
            Some(b"{\"a\":1}".to_vec())
        );

        store.save("movie", "1", b"{\"a\":2}".to_vec()).await.unwrap();
        assert_eq!(
            store.load("movie", "1").await.unwrap(),
            Some(b"{\"a\":2}".to_vec())
        );

        store.clear("movie", "1").await.unwrap();
        assert_eq!(store.load("movie", "1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_absent_key_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.clear("genre", "never saved").await.unwrap();
    }

    #[tokio::test]
    async fn test_data_survives_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::new(dir.path())
            .save("genre", "film noir", b"{}".to_vec())
            .await
            .unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.load("genre", "film noir").await.unwrap(),
            Some(b"{}".to_vec())
        );
    }
}
