//! Shopping cart reducer.
//!
//! The cart is a sequence of items keyed by product id. Insertion order is
//! kept but carries no meaning. Persistence and change notification live in
//! the client crate; this type is the pure mutation logic.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A single cart entry: product id plus a positive quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity (always >= 1 while stored in a cart).
    pub quantity: i64,
}

/// A shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a cart from a previously persisted item sequence.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Add a quantity of a product.
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// otherwise a new entry is appended.
    pub fn add(&mut self, product_id: ProductId, quantity: i64) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem {
                product_id,
                quantity,
            });
        }
    }

    /// Remove a product entirely. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Set the quantity of a product.
    ///
    /// A quantity <= 0 removes the entry. The quantity is overwritten, not
    /// added to the existing one.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            existing.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the entry for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// The item sequence, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
