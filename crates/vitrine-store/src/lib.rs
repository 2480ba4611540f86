//! In-memory storage for the Vitrine storefront.
//!
//! Two stores back the API layer:
//!
//! - [`CatalogStore`]: the product list, seeded once at process start and
//!   immutable afterwards. Answers lookup, filter, and search queries.
//! - [`OrderStore`]: submitted orders. Assigns identifiers and tracks
//!   status transitions. Append-only except for the status field.
//!
//! Both are plain owned values with no interior locking; the API layer
//! decides how they are shared.

pub mod catalog;
pub mod orders;
pub mod seed;

pub use catalog::CatalogStore;
pub use orders::OrderStore;
pub use seed::sample_products;
