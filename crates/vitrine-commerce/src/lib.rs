//! Storefront domain types and logic for Vitrine.
//!
//! This crate provides the shared vocabulary of the storefront:
//!
//! - **Catalog**: digital products and their categories
//! - **Cart**: a product-id → quantity mapping with merge semantics
//! - **Order**: submitted orders, statuses, payment methods
//! - **Contact**: contact form payloads
//! - **Validation**: field-level request validation mirroring the wire schema
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(ProductId::new("1"), 1);
//! cart.add(ProductId::new("1"), 2);
//! assert_eq!(cart.total_items(), 3);
//! ```

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod validate;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Orders
    pub use crate::order::{Order, OrderDraft, OrderStatus, PaymentMethod};

    // Contact
    pub use crate::contact::ContactForm;

    // Validation
    pub use crate::validate::{ContactPayload, FieldError, OrderDraftPayload};
}
