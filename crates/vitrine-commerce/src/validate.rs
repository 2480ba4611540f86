//! Field-level request validation.
//!
//! Request bodies are deserialized into payload structs whose fields are all
//! optional, then validated into their domain counterparts. This keeps shape
//! errors out of the deserializer and produces structured per-field detail
//! instead of a single opaque parse failure.

use crate::cart::CartItem;
use crate::contact::{ContactForm, MIN_MESSAGE_LEN, MIN_NAME_LEN};
use crate::ids::ProductId;
use crate::money::Money;
use crate::order::{OrderDraft, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

/// A single validation failure tied to a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    /// Dotted path of the offending field (e.g. `items.0.quantity`).
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// containing a dot. Deliberately loose; the storefront never sends mail.
pub fn is_valid_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !s.contains(char::is_whitespace)
}

/// Unvalidated cart item as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartItemPayload {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Unvalidated order draft as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraftPayload {
    #[serde(default)]
    pub items: Option<Vec<CartItemPayload>>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl OrderDraftPayload {
    /// Validate into an [`OrderDraft`], collecting every field error.
    pub fn validate(self) -> Result<OrderDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let items = match self.items {
            Some(raw_items) => {
                let mut items = Vec::with_capacity(raw_items.len());
                for (idx, raw) in raw_items.into_iter().enumerate() {
                    let product_id = match raw.product_id {
                        Some(id) => Some(ProductId::new(id)),
                        None => {
                            errors.push(FieldError::new(
                                format!("items.{idx}.productId"),
                                "Required",
                            ));
                            None
                        }
                    };
                    // Quantity defaults to 1 when omitted.
                    let quantity = raw.quantity.unwrap_or(1);
                    if quantity <= 0 {
                        errors.push(FieldError::new(
                            format!("items.{idx}.quantity"),
                            "Number must be greater than 0",
                        ));
                    }
                    if let Some(product_id) = product_id {
                        items.push(CartItem {
                            product_id,
                            quantity,
                        });
                    }
                }
                items
            }
            None => {
                errors.push(FieldError::new("items", "Required"));
                Vec::new()
            }
        };

        let total_amount = match self.total_amount {
            Some(amount) if amount > 0.0 => Some(Money::from_decimal(amount)),
            Some(_) => {
                errors.push(FieldError::new(
                    "totalAmount",
                    "Number must be greater than 0",
                ));
                None
            }
            None => {
                errors.push(FieldError::new("totalAmount", "Required"));
                None
            }
        };

        let customer_name = match self.customer_name {
            Some(name) => Some(name),
            None => {
                errors.push(FieldError::new("customerName", "Required"));
                None
            }
        };

        let customer_email = match self.customer_email {
            Some(email) if is_valid_email(&email) => Some(email),
            Some(_) => {
                errors.push(FieldError::new("customerEmail", "Invalid email"));
                None
            }
            None => {
                errors.push(FieldError::new("customerEmail", "Required"));
                None
            }
        };

        let status = match self.status.as_deref() {
            Some(s) => match OrderStatus::from_str(s) {
                Some(status) => Some(status),
                None => {
                    errors.push(FieldError::new("status", "Invalid enum value"));
                    None
                }
            },
            None => {
                errors.push(FieldError::new("status", "Required"));
                None
            }
        };

        let payment_method = match self.payment_method.as_deref() {
            Some(s) => match PaymentMethod::from_str(s) {
                Some(method) => Some(method),
                None => {
                    errors.push(FieldError::new("paymentMethod", "Invalid enum value"));
                    None
                }
            },
            None => {
                errors.push(FieldError::new("paymentMethod", "Required"));
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // Every None pushed an error, so the fallback arm is unreachable here.
        match (
            total_amount,
            customer_name,
            customer_email,
            status,
            payment_method,
        ) {
            (Some(total_amount), Some(customer_name), Some(customer_email), Some(status), Some(payment_method)) => {
                Ok(OrderDraft {
                    items,
                    total_amount,
                    customer_name,
                    customer_email,
                    status,
                    payment_method,
                })
            }
            _ => Err(vec![FieldError::new("body", "Invalid order data")]),
        }
    }
}

/// Unvalidated contact form as it arrives on the wire.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactPayload {
    /// Validate into a [`ContactForm`], collecting every field error.
    pub fn validate(self) -> Result<ContactForm, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.unwrap_or_default();
        if name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                "name",
                "Nome deve ter pelo menos 2 caracteres",
            ));
        }

        let email = self.email.unwrap_or_default();
        if !is_valid_email(&email) {
            errors.push(FieldError::new("email", "Email inválido"));
        }

        let message = self.message.unwrap_or_default();
        if message.chars().count() < MIN_MESSAGE_LEN {
            errors.push(FieldError::new(
                "message",
                "Mensagem deve ter pelo menos 10 caracteres",
            ));
        }

        if errors.is_empty() {
            Ok(ContactForm {
                name,
                email,
                message,
            })
        } else {
            Err(errors)
        }
    }
}
