//! Shared application state.

use std::sync::{Arc, Mutex};
use vitrine_store::{CatalogStore, OrderStore};

/// State shared across request handlers.
///
/// The catalog is immutable after seeding, so it needs no lock. The order
/// store takes writes and sits behind a mutex; each request's mutation is
/// atomic under the lock.
#[derive(Debug)]
pub struct AppState {
    /// The seeded product catalog.
    pub catalog: CatalogStore,
    /// Submitted orders.
    pub orders: Mutex<OrderStore>,
}

impl AppState {
    /// Build state over a catalog, starting with no orders.
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            orders: Mutex::new(OrderStore::new()),
        }
    }

    /// Build state seeded with the sample catalog.
    pub fn with_sample_catalog() -> Self {
        Self::new(CatalogStore::with_sample_catalog())
    }
}

/// Handle passed to the router and handlers.
pub type SharedState = Arc<AppState>;
