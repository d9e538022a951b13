//! Phone Storefront Library
//!
//! Core of a small e-commerce storefront: a persisted shopping cart with
//! quantity merging, reordering and derived totals, and a pure catalog
//! query pipeline (search, filters, stable price sort, pagination) over a
//! list fetched once from a data source.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod error;
pub mod notify;
pub mod router;
pub mod state;
