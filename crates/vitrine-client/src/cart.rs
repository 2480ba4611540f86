//! Cart state container.
//!
//! Owned by the application shell and passed to whichever views need it.
//! Every mutation writes through to storage and then notifies subscribers,
//! so views observe the cart rather than polling it.

use vitrine_commerce::cart::{Cart, CartItem};
use vitrine_commerce::ids::ProductId;

use crate::storage::CartStorage;

type Listener = Box<dyn Fn(&Cart) + Send>;

/// The client-held cart, persisted across sessions.
pub struct CartState {
    cart: Cart,
    storage: Box<dyn CartStorage>,
    listeners: Vec<Listener>,
}

impl CartState {
    /// Restore the cart from storage. Malformed or absent persisted state
    /// yields an empty cart.
    pub fn restore(storage: Box<dyn CartStorage>) -> Self {
        let cart = Cart::from_items(storage.load());
        Self {
            cart,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Register a subscriber notified after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add a quantity of a product (merging with an existing entry).
    pub fn add(&mut self, product_id: ProductId, quantity: i64) {
        self.cart.add(product_id, quantity);
        self.persist_and_notify();
    }

    /// Remove a product entirely.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
        self.persist_and_notify();
    }

    /// Overwrite a product's quantity; <= 0 removes it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        self.cart.update_quantity(product_id, quantity);
        self.persist_and_notify();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist_and_notify();
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The item sequence, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    fn persist_and_notify(&self) {
        self.storage.save(self.cart.items());
        for listener in &self.listeners {
            listener(&self.cart);
        }
    }
}

impl std::fmt::Debug for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartState")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
