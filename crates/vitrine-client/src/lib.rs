//! Client-side storefront logic for Vitrine.
//!
//! Everything the UI holds between requests lives here as explicit objects
//! with constructor injection instead of ambient globals:
//!
//! - [`CartState`]: the cart container. Mutations write through to a
//!   [`storage::CartStorage`] backend and notify subscribers.
//! - [`StoreClient`]: thin HTTP wrapper over the storefront API.
//! - [`CheckoutFlow`]: composes the cart with fetched product details to
//!   compute totals and submit an order.

pub mod api;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod storage;

pub use api::{CatalogClient, OrderClient, StoreClient};
pub use cart::CartState;
pub use checkout::{CheckoutFlow, CheckoutSummary, CustomerDetails};
pub use error::ClientError;
