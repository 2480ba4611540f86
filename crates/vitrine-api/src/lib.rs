//! HTTP API layer for the Vitrine storefront.
//!
//! Translates HTTP requests into catalog/order store operations, validates
//! input shape, and maps results to status codes:
//!
//! - validation failure → 400 with field-level detail where available
//! - unknown product/order id → 404
//! - unexpected store failure → 500 with a generic message
//!
//! All reads are synchronous lookups against the immutable catalog; order
//! mutations go through a mutex so each request's write is atomic.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::api_router;
pub use state::{AppState, SharedState};
