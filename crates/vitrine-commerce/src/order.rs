//! Order types.

use crate::cart::CartItem;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed, downloads released.
    Completed,
    /// Payment failed.
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
        }
    }

    /// Parse from the wire string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "failed" => Some(OrderStatus::Failed),
            _ => None,
        }
    }
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    MercadoPago,
    Stripe,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::MercadoPago => "mercadopago",
            PaymentMethod::Stripe => "stripe",
        }
    }

    /// Parse from the wire string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pix" => Some(PaymentMethod::Pix),
            "mercadopago" => Some(PaymentMethod::MercadoPago),
            "stripe" => Some(PaymentMethod::Stripe),
            _ => None,
        }
    }
}

/// An order payload prior to identifier/timestamp assignment by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Items being purchased.
    pub items: Vec<CartItem>,
    /// Client-computed total. Not re-verified against product prices.
    pub total_amount: Money,
    /// Customer name.
    pub customer_name: String,
    /// Customer email.
    pub customer_email: String,
    /// Initial status (always `pending` from the client).
    pub status: OrderStatus,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

/// A stored order.
///
/// Append-only except for the status field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-generated identifier.
    pub id: OrderId,
    /// Items purchased.
    pub items: Vec<CartItem>,
    /// Total amount at submission time.
    pub total_amount: Money,
    /// Customer name.
    pub customer_name: String,
    /// Customer email.
    pub customer_email: String,
    /// Current status.
    pub status: OrderStatus,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Total item count across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
