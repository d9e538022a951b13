//! Cart route handlers
//!
//! The UI-facing edge of the cart store. Handlers own the call-site
//! policies the store deliberately leaves out: decrementing to zero maps
//! to an explicit remove, and a rejected reorder becomes a 409. They also
//! push the human-readable notification events.

use crate::cart::helpers::format_item_summary;
use crate::cart::models::{CartView, CheckoutReceipt, ReorderInput, UpdateQuantityInput};
use crate::catalog::CatalogItem;
use crate::notify::Severity;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, routing::post, routing::put, Json, Router};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cart", get(get_cart))
        .route("/api/cart/items", post(add_item).put(reorder_items))
        .route(
            "/api/cart/items/:id",
            put(update_quantity).patch(update_quantity).delete(remove_item),
        )
        .route("/api/cart/toggle", post(toggle_cart))
        .route("/api/cart/checkout", post(checkout))
}

fn cart_view(state: &SharedState) -> Json<CartView> {
    Json(CartView {
        items: state.cart.lines(),
        total_price: state.cart.total_price(),
        is_open: state.cart.is_open(),
    })
}

/// Endpoint: GET /api/cart
async fn get_cart(State(state): State<SharedState>) -> Json<CartView> {
    cart_view(&state)
}

/// Endpoint: POST /api/cart/items
/// Adds one unit of the item, merging into an existing line.
async fn add_item(
    State(state): State<SharedState>,
    Json(item): Json<CatalogItem>,
) -> (StatusCode, Json<CartView>) {
    let name = item.name.clone();
    state.cart.add(item);
    state
        .notifier
        .notify(format!("{name} added to cart"), Severity::Success);
    (StatusCode::CREATED, cart_view(&state))
}

/// Endpoint: PATCH /api/cart/items/:id
/// A quantity of 0 is an explicit remove; the store itself only clamps.
async fn update_quantity(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateQuantityInput>,
) -> Json<CartView> {
    if input.quantity == 0 {
        state.cart.remove(&id);
    } else {
        state.cart.update_quantity(&id, input.quantity);
    }
    cart_view(&state)
}

/// Endpoint: DELETE /api/cart/items/:id
async fn remove_item(State(state): State<SharedState>, Path(id): Path<String>) -> Json<CartView> {
    state.cart.remove(&id);
    state.notifier.notify("Item removed from cart", Severity::Info);
    cart_view(&state)
}

/// Endpoint: PUT /api/cart/items
/// Wholesale replacement of the line order (drag-reorder).
async fn reorder_items(
    State(state): State<SharedState>,
    Json(input): Json<ReorderInput>,
) -> Response {
    if !state.cart.reorder(input.items) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "reorder must be a permutation of the current cart" })),
        )
            .into_response();
    }
    cart_view(&state).into_response()
}

/// Endpoint: POST /api/cart/toggle
async fn toggle_cart(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let is_open = state.cart.toggle_open();
    Json(json!({ "isOpen": is_open }))
}

/// Endpoint: POST /api/cart/checkout
/// Simulated checkout: empties the cart and issues a receipt.
async fn checkout(State(state): State<SharedState>) -> Response {
    let lines = state.cart.lines();
    if lines.is_empty() {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "cart is empty" })),
        )
            .into_response();
    }

    let receipt = CheckoutReceipt {
        order_id: Uuid::new_v4().simple().to_string(),
        total_price: state.cart.total_price(),
        item_summary: format_item_summary(&lines),
    };
    state.cart.clear();

    info!(order_id = %receipt.order_id, summary = %receipt.item_summary, "checkout");
    state
        .notifier
        .notify("Order placed, thank you!", Severity::Success);

    Json(receipt).into_response()
}
