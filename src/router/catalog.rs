//! Catalog route handlers
//!
//! Read-only views over the catalog cache plus the manual refresh used
//! as the "try again" affordance after a data-source failure.

use crate::catalog::{price_bounds, run_query, CatalogItem, CatalogPage, CatalogQuery, SortOrder};
use crate::error::Result;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::{routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/phones", get(list_phones))
        .route("/api/phones/:id", get(get_phone))
        .route("/api/catalog", get(query_catalog))
        .route("/api/catalog/refresh", post(refresh_catalog))
}

/// Query-string shape for GET /api/catalog. Absent price bounds fall back
/// to the full list's min/max, matching a freshly reset filter panel.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
    /// Comma-separated brand names.
    pub brands: Option<String>,
    pub memory: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogViewResponse {
    #[serde(flatten)]
    pub page: CatalogPage,
    /// Min/max price over the full (unfiltered) list, for filter resets.
    pub price_bounds: (f64, f64),
}

/// Endpoint: GET /api/phones
/// The full catalog, fetched on first touch and cached after.
async fn list_phones(State(state): State<SharedState>) -> Result<Json<Vec<CatalogItem>>> {
    state.ensure_catalog().await?;
    Ok(Json(state.catalog.items()))
}

/// Endpoint: GET /api/phones/:id
async fn get_phone(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>> {
    Ok(Json(state.source.fetch_by_id(&id).await?))
}

/// Endpoint: GET /api/catalog
/// Runs the query pipeline over the cached list.
async fn query_catalog(
    State(state): State<SharedState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogViewResponse>> {
    state.ensure_catalog().await?;
    let items = state.catalog.items();
    let bounds = price_bounds(&items);

    let query = CatalogQuery {
        search_text: params.search.unwrap_or_default(),
        brands: params
            .brands
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default(),
        memory: params.memory.filter(|m| !m.is_empty()),
        price_range: (
            params.min_price.unwrap_or(bounds.0),
            params.max_price.unwrap_or(bounds.1),
        ),
        sort: params.sort.unwrap_or_default(),
        page: params.page.unwrap_or(1).max(1),
        ..CatalogQuery::default()
    };

    Ok(Json(CatalogViewResponse {
        page: run_query(&items, &query),
        price_bounds: bounds,
    }))
}

/// Endpoint: POST /api/catalog/refresh
/// Manual retry after a load failure; stale completions are discarded.
async fn refresh_catalog(State(state): State<SharedState>) -> Result<Json<serde_json::Value>> {
    let count = state.refresh_catalog().await?;
    Ok(Json(serde_json::json!({ "status": "refreshed", "count": count })))
}
