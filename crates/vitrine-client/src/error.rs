//! Client error types.

use thiserror::Error;

/// Errors surfaced to the storefront UI.
///
/// No retries anywhere: every failure is terminal for that attempt and the
/// cart is left intact so the user can try again.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server rejected the request: {0}")]
    Api(String),

    /// Checkout was attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout was attempted without a required customer field.
    #[error("Missing customer {0}")]
    MissingCustomerField(&'static str),

    /// Arithmetic overflow while computing totals.
    #[error("Arithmetic overflow in total calculation")]
    Overflow,
}
