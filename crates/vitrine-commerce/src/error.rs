//! Storefront error types.

use thiserror::Error;

/// Errors raised by storefront operations.
///
/// Carries the offending identifier or value for the log; the API layer
/// decides what of it reaches the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Unknown order status value.
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
}
