//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, the versioned persistence payload, DTOs)
//! - The cart store (merge/remove/reorder/clamp semantics, derived total)
//! - Persistence backends (file-backed JSON, in-memory)
//! - Business logic helpers (summaries)

pub mod helpers;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartLine, SavedCart, CART_STORAGE_KEY, CART_VERSION};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::{CartSnapshot, CartStore};
