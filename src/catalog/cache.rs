//! In-memory catalog cache.
//!
//! The catalog is fetched once and queried many times. Refreshes carry a
//! generation number so that when two fetches race (rapid re-navigation),
//! only the result of the latest one is installed; a stale completion is
//! discarded instead of clobbering newer data.

use super::models::CatalogItem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::debug;

#[derive(Default)]
pub struct CatalogCache {
    items: RwLock<Option<Vec<CatalogItem>>>,
    generation: AtomicU64,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh and returns its generation token.
    pub fn begin_refresh(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Installs a fetched list if no newer refresh has begun since
    /// `generation` was handed out. Returns whether the list was applied.
    pub fn apply(&self, generation: u64, items: Vec<CatalogItem>) -> bool {
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding stale catalog refresh");
            return false;
        }
        *self.items.write().unwrap_or_else(|e| e.into_inner()) = Some(items);
        true
    }

    /// Whether a fetch has ever completed.
    pub fn is_loaded(&self) -> bool {
        self.items
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Snapshot of the cached list; empty before the first fetch lands.
    pub fn items(&self) -> Vec<CatalogItem> {
        self.items
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .unwrap_or_default()
    }
}
