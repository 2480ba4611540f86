//! Request handlers.

pub mod contact;
pub mod orders;
pub mod products;
