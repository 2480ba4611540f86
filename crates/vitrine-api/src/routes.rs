//! API route table.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{contact, orders, products};
use crate::state::SharedState;

/// Build the API router over shared state.
pub fn api_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/products", get(products::list))
        .route("/api/products/featured", get(products::featured))
        .route("/api/products/{id}", get(products::by_id))
        .route("/api/categories", get(products::categories))
        .route(
            "/api/categories/{category}/products",
            get(products::by_category),
        )
        .route("/api/orders", post(orders::create))
        .route("/api/orders/{id}", get(orders::by_id))
        .route("/api/orders/{id}/status", patch(orders::update_status))
        .route("/api/contact", post(contact::submit))
        .with_state(state)
}
