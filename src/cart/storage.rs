//! Cart persistence backends.
//!
//! Durable key-value storage for the cart, one fixed key. The store writes
//! the full payload on every mutation and deletes the entry on clear, so a
//! never-used cart and a cleared cart read back identically (absent).
//!
//! All operations are synchronous: a mutation's write lands in the same
//! turn as the mutation itself.

use super::models::{SavedCart, CART_STORAGE_KEY, CART_VERSION};
use crate::error::StorageError;
use std::path::PathBuf;
use std::sync::Mutex;

pub trait CartStorage: Send + Sync {
    /// Reads the persisted payload, `Ok(None)` when absent.
    fn load(&self) -> Result<Option<SavedCart>, StorageError>;

    /// Writes the full payload.
    fn save(&self, cart: &SavedCart) -> Result<(), StorageError>;

    /// Deletes the persisted entry entirely. Absent is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Restores saved lines only when the embedded version tag matches the
/// current schema version; anything else reads as an empty cart.
pub fn restore_lines(storage: &dyn CartStorage) -> Vec<super::models::CartLine> {
    match storage.load() {
        Ok(Some(saved)) if saved.version == CART_VERSION => saved.items,
        Ok(Some(saved)) => {
            tracing::warn!(version = %saved.version, "stored cart has unknown schema version, starting empty");
            Vec::new()
        }
        Ok(None) => Vec::new(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read stored cart, starting empty");
            Vec::new()
        }
    }
}

// =============================================================================
// File backend
// =============================================================================

/// Stores the cart as `cart_data.json` in a data directory.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// `data_dir` is created on first write if missing.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(format!("{CART_STORAGE_KEY}.json")),
        }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<SavedCart>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, cart: &SavedCart) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let payload = serde_json::to_string_pretty(cart)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// In-memory backend
// =============================================================================

/// In-memory backend for tests and ephemeral sessions. `fail_writes`
/// simulates an unavailable backing store (quota exhaustion and the like).
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<SavedCart>>,
    pub fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            slot: Mutex::new(None),
            fail_writes: true,
        }
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<SavedCart>, StorageError> {
        Ok(self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, cart: &SavedCart) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable);
        }
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(cart.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable);
        }
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
