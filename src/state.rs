//! Application state.
//!
//! One `AppState` is built at startup and shared by handle; the cart
//! store, catalog cache, data source and notifier are all injected here
//! rather than living as globals.

use crate::cart::{CartStorage, CartStore, JsonFileStorage};
use crate::catalog::{CatalogCache, CatalogSource, JsonFileSource};
use crate::error::Result;
use crate::notify::Notifier;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub cart: CartStore,
    pub catalog: CatalogCache,
    pub source: Box<dyn CatalogSource>,
    pub notifier: Notifier,
}

impl AppState {
    /// Production wiring: file-backed cart storage under `./data` and a
    /// discovered `phones.json` catalog source.
    pub fn new() -> Self {
        let data_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("data");
        info!(dir = %data_dir.display(), "using cart data directory");

        Self::with_parts(
            Arc::new(JsonFileStorage::new(data_dir)),
            Box::new(JsonFileSource::discover()),
        )
    }

    /// Explicit wiring, used by tests to swap in in-memory backends.
    pub fn with_parts(storage: Arc<dyn CartStorage>, source: Box<dyn CatalogSource>) -> Self {
        Self {
            cart: CartStore::new(storage),
            catalog: CatalogCache::new(),
            source,
            notifier: Notifier::new(),
        }
    }

    /// Fetches the full catalog and installs it in the cache, unless a
    /// newer refresh got there first. Errors propagate to the caller; the
    /// cache keeps its previous contents.
    pub async fn refresh_catalog(&self) -> Result<usize> {
        let generation = self.catalog.begin_refresh();
        let items = self.source.fetch_all().await?;
        let count = items.len();
        if self.catalog.apply(generation, items) {
            info!(count, "catalog refreshed");
        }
        Ok(count)
    }

    /// Fetch-once behavior for read paths: loads the catalog on first
    /// touch, then serves from the cache.
    pub async fn ensure_catalog(&self) -> Result<()> {
        if !self.catalog.is_loaded() {
            self.refresh_catalog().await?;
        }
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
