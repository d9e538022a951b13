//! Shopping Cart Store
//!
//! Single source of truth for cart contents across the session. The store
//! is an explicit, injectable service: constructed once at startup with a
//! persistence backend and shared by handle, never ambient global state.
//!
//! Every mutation synchronously persists the full line list (versioned)
//! and publishes a snapshot to subscribers. Persistence failures are
//! logged and swallowed; the in-memory state stays authoritative, so cart
//! operations never fail from the caller's point of view.

use super::models::{CartLine, SavedCart};
use super::storage::{restore_lines, CartStorage};
use crate::catalog::CatalogItem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::watch;
use tracing::warn;

/// What subscribers see after each mutation.
#[derive(Debug, Clone, Default)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
    pub total_price: f64,
}

pub struct CartStore {
    lines: RwLock<Vec<CartLine>>,
    /// UI visibility flag. Session-only, never persisted.
    is_open: AtomicBool,
    storage: Arc<dyn CartStorage>,
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Restores the saved cart (empty on version mismatch, corruption or
    /// absence) and wires the snapshot channel.
    pub fn new(storage: Arc<dyn CartStorage>) -> Self {
        let lines = restore_lines(storage.as_ref());
        let (snapshot_tx, _) = watch::channel(CartSnapshot {
            total_price: total_of(&lines),
            items: lines.clone(),
        });
        Self {
            lines: RwLock::new(lines),
            is_open: AtomicBool::new(false),
            storage,
            snapshot_tx,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds an item: merges into an existing line (quantity +1) or appends
    /// a new line with quantity 1. Always succeeds.
    pub fn add(&self, item: CatalogItem) {
        self.mutate(|lines| {
            if let Some(existing) = lines.iter_mut().find(|l| l.id() == item.id) {
                existing.quantity += 1;
            } else {
                lines.push(CartLine::new(item));
            }
        });
    }

    /// Removes the line with the given id. Silent no-op when absent.
    pub fn remove(&self, id: &str) {
        self.mutate(|lines| lines.retain(|l| l.id() != id));
    }

    /// Sets a line's quantity, clamped to a minimum of 1. Never removes;
    /// callers that want removal-on-zero call [`remove`](Self::remove)
    /// explicitly. Silent no-op when the id is absent.
    pub fn update_quantity(&self, id: &str, quantity: u32) {
        self.mutate(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.id() == id) {
                line.quantity = quantity.max(1);
            }
        });
    }

    /// Replaces the line sequence with a caller-supplied ordering
    /// (drag-reorder). The new list must be a permutation of the current
    /// lines; anything else is rejected and the old order kept.
    pub fn reorder(&self, new_lines: Vec<CartLine>) -> bool {
        let mut applied = false;
        self.mutate(|lines| {
            if !is_permutation(lines, &new_lines) {
                warn!("reorder rejected: supplied list is not a permutation of the cart");
                return;
            }
            *lines = new_lines;
            applied = true;
        });
        applied
    }

    /// Empties the cart and deletes the persisted entry entirely, so a
    /// cleared cart and a never-used cart read back the same.
    pub fn clear(&self) {
        self.write_lines().clear();
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "failed to clear persisted cart");
        }
        self.publish(Vec::new());
    }

    /// Flips the UI visibility flag and returns the new value.
    pub fn toggle_open(&self) -> bool {
        !self.is_open.fetch_xor(true, Ordering::SeqCst)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn lines(&self) -> Vec<CartLine> {
        self.read_lines().clone()
    }

    /// Recomputed from the current lines on every access.
    pub fn total_price(&self) -> f64 {
        total_of(&self.read_lines())
    }

    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Subscribes to cart snapshots; the receiver sees the state after
    /// each mutation.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshot_tx.subscribe()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn mutate(&self, op: impl FnOnce(&mut Vec<CartLine>)) {
        let snapshot = {
            let mut lines = self.write_lines();
            op(&mut lines);
            lines.clone()
        };
        self.persist(&snapshot);
        // Publish the clone taken under the lock, so each subscriber
        // snapshot corresponds to exactly one mutation even when
        // mutations interleave.
        self.publish(snapshot);
    }

    fn persist(&self, lines: &[CartLine]) {
        if let Err(err) = self.storage.save(&SavedCart::current(lines.to_vec())) {
            // In-memory state stays authoritative for the session.
            warn!(error = %err, "failed to persist cart");
        }
    }

    fn publish(&self, items: Vec<CartLine>) {
        let _ = self.snapshot_tx.send(CartSnapshot {
            total_price: total_of(&items),
            items,
        });
    }

    fn read_lines(&self) -> std::sync::RwLockReadGuard<'_, Vec<CartLine>> {
        self.lines.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lines(&self) -> std::sync::RwLockWriteGuard<'_, Vec<CartLine>> {
        self.lines.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn total_of(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Same line ids with the same multiplicities, order aside.
fn is_permutation(current: &[CartLine], proposed: &[CartLine]) -> bool {
    let mut a: Vec<&str> = current.iter().map(CartLine::id).collect();
    let mut b: Vec<&str> = proposed.iter().map(CartLine::id).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
