//! Catalog Domain Models
//!
//! Product records as served by the catalog data source. The wire format is
//! camelCase JSON; fields the source omits deserialize as `None` and unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// Free-form hardware attributes of a phone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneSpecs {
    pub screen: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub camera: Option<String>,
}

/// A product record from the catalog source. Immutable from the cart's
/// perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Opaque unique identifier.
    pub id: String,

    pub name: String,

    /// Display brand; the source may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Price in a single implicit currency unit. Non-negative.
    pub price: f64,

    /// Pre-discount price, when the item is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Monthly payment amount, independent of `old_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<PhoneSpecs>,
}

impl CatalogItem {
    /// The discount amount, when the item carries a sensible `old_price`.
    ///
    /// An inverted pair (`old_price < price`) is a data-quality issue and
    /// reads as no discount rather than a negative one.
    pub fn discount(&self) -> Option<f64> {
        match self.old_price {
            Some(old) if old >= self.price => Some(old - self.price),
            _ => None,
        }
    }

    /// Brand for matching purposes: a missing brand behaves as an empty
    /// string, which never matches a non-empty query.
    pub fn brand_or_empty(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }

    /// The storage variant, when the source provided specs at all.
    pub fn storage_spec(&self) -> Option<&str> {
        self.specs.as_ref()?.storage.as_deref()
    }
}
