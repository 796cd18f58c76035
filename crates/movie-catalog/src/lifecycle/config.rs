//! Catalog configuration.

use grain_framework::{FileStore, MemoryStore, RuntimeOptions, StateStore};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Settings for a [`CatalogSystem`](super::CatalogSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory for the file store. `None` keeps all state in memory.
    pub store_dir: Option<PathBuf>,
    pub idle_timeout: Duration,
    pub call_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let runtime = RuntimeOptions::default();
        Self {
            store_dir: None,
            idle_timeout: runtime.idle_timeout,
            call_timeout: runtime.call_timeout,
        }
    }
}

impl CatalogConfig {
    pub fn runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions::default()
            .with_idle_timeout(self.idle_timeout)
            .with_call_timeout(self.call_timeout)
    }

    /// The state store selected by `store_dir`.
    pub fn open_store(&self) -> Arc<dyn StateStore> {
        match &self.store_dir {
            Some(dir) => Arc::new(FileStore::new(dir.clone())),
            None => Arc::new(MemoryStore::new()),
        }
    }
}
