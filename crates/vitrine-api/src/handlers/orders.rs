//! Order endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use vitrine_commerce::ids::OrderId;
use vitrine_commerce::order::{Order, OrderStatus};
use vitrine_commerce::validate::OrderDraftPayload;
use vitrine_commerce::CommerceError;

use crate::error::ApiError;
use crate::state::SharedState;

/// `POST /api/orders`
///
/// Validates the full draft before anything reaches the store; a rejected
/// draft creates nothing.
pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<OrderDraftPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid order data"))?;
    let draft = payload
        .validate()
        .map_err(|details| ApiError::validation("Invalid order data", details))?;

    let mut orders = state
        .orders
        .lock()
        .map_err(|_| ApiError::internal("Failed to create order"))?;
    let order = orders.create(draft);
    tracing::info!(order_id = %order.id, total = %order.total_amount, "order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /api/orders/{id}`
pub async fn by_id(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let orders = state
        .orders
        .lock()
        .map_err(|_| ApiError::internal("Failed to fetch order"))?;
    let order = orders
        .get_by_id(&OrderId::new(id.clone()))
        .cloned()
        .ok_or(CommerceError::OrderNotFound(id))?;
    Ok(Json(order))
}

/// Body of a status update request.
#[derive(Debug, Default, Deserialize)]
pub struct StatusPayload {
    #[serde(default)]
    pub status: Option<String>,
}

/// `PATCH /api/orders/{id}/status`
///
/// The status value is checked against the enum before the store is
/// touched; an invalid value leaves the stored order untouched.
pub async fn update_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusPayload>, JsonRejection>,
) -> Result<Json<Order>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid status"))?;
    let raw = payload.status.unwrap_or_default();
    let status = OrderStatus::from_str(&raw)
        .ok_or(CommerceError::InvalidStatus(raw))?;

    let mut orders = state
        .orders
        .lock()
        .map_err(|_| ApiError::internal("Failed to update order status"))?;
    let order = orders
        .update_status(&OrderId::new(id.clone()), status)
        .ok_or(CommerceError::OrderNotFound(id))?;
    tracing::info!(order_id = %order.id, status = status.as_str(), "order status updated");
    Ok(Json(order))
}
