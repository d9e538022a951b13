//! Shopping Cart Domain Models
//!
//! Cart lines, the versioned persistence payload, and the REST DTOs.

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// Schema version embedded in persisted payloads. A stored payload with a
/// different version reads back as an empty cart.
pub const CART_VERSION: &str = "1.0";

/// Storage key (file stem) for the persisted cart.
pub const CART_STORAGE_KEY: &str = "cart_data";

/// Returns the default quantity (1) for cart lines
fn default_quantity() -> u32 {
    1
}

/// A catalog item plus a quantity, the unit of cart storage.
///
/// Identity is the underlying item's `id`; the store guarantees at most
/// one line per id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Positive quantity, minimum 1 (defaults to 1).
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: CatalogItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn line_total(&self) -> f64 {
        self.item.price * self.quantity as f64
    }
}

/// The persisted cart payload: the full line list tagged with a schema
/// version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCart {
    pub version: String,
    pub items: Vec<CartLine>,
}

impl SavedCart {
    pub fn current(items: Vec<CartLine>) -> Self {
        Self {
            version: CART_VERSION.to_string(),
            items,
        }
    }
}

// =============================================================================
// REST DTOs
// =============================================================================

/// Body for PATCH /api/cart/items/:id
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityInput {
    pub quantity: u32,
}

/// Body for PUT /api/cart/items (drag-reorder)
#[derive(Debug, Deserialize)]
pub struct ReorderInput {
    pub items: Vec<CartLine>,
}

/// Response for GET /api/cart
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub total_price: f64,
    pub is_open: bool,
}

/// Response for POST /api/cart/checkout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: String,
    pub total_price: f64,
    pub item_summary: String,
}
