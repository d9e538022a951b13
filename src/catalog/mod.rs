//! Catalog Domain Module
//!
//! Everything on the product side of the storefront:
//! - Domain models (CatalogItem, PhoneSpecs)
//! - The query pipeline (search, filters, stable sort, pagination)
//! - The data source contract and its file-backed implementation
//! - The fetched-list cache with last-wins refresh semantics

pub mod cache;
pub mod models;
pub mod query;
pub mod source;

// Re-export commonly used types for convenience
pub use cache::CatalogCache;
pub use models::{CatalogItem, PhoneSpecs};
pub use query::{price_bounds, run_query, CatalogPage, CatalogQuery, SortOrder, DEFAULT_PAGE_SIZE};
pub use source::{CatalogSource, JsonFileSource};
