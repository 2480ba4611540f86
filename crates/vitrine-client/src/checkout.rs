//! Checkout flow.
//!
//! Composes the cart with product details fetched through the API (never
//! locally held) to compute totals and submit an order.

use vitrine_commerce::catalog::Product;
use vitrine_commerce::money::Money;
use vitrine_commerce::order::{Order, OrderDraft, OrderStatus, PaymentMethod};

use crate::api::{CatalogClient, OrderClient};
use crate::cart::CartState;
use crate::error::ClientError;

/// One resolved line of the checkout summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutLine {
    /// The resolved product.
    pub product: Product,
    /// Quantity from the cart.
    pub quantity: i64,
    /// Unit price × quantity.
    pub subtotal: Money,
}

/// The visual order summary.
///
/// Cart items whose product no longer exists contribute zero and are
/// omitted from the lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSummary {
    pub lines: Vec<CheckoutLine>,
    pub total: Money,
}

/// Customer fields collected by the checkout form.
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub payment_method: PaymentMethod,
}

/// The checkout flow over an API client.
#[derive(Debug)]
pub struct CheckoutFlow<C> {
    client: C,
}

impl<C: CatalogClient + OrderClient> CheckoutFlow<C> {
    /// Build a flow over the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Resolve cart items against the catalog and compute the total.
    pub async fn summary(&self, cart: &CartState) -> Result<CheckoutSummary, ClientError> {
        let mut lines = Vec::new();
        for item in cart.items() {
            // A stale product id silently drops out of the summary.
            let Some(product) = self.client.product(&item.product_id).await? else {
                continue;
            };
            let subtotal = product
                .price
                .try_multiply(item.quantity)
                .ok_or(ClientError::Overflow)?;
            lines.push(CheckoutLine {
                product,
                quantity: item.quantity,
                subtotal,
            });
        }
        let total = Money::try_sum(lines.iter().map(|l| &l.subtotal))
            .ok_or(ClientError::Overflow)?;
        Ok(CheckoutSummary { lines, total })
    }

    /// Submit the cart as an order.
    ///
    /// Requires a non-empty customer name and email and a non-empty cart.
    /// On success the cart is cleared; on failure it is left intact so the
    /// user can retry.
    pub async fn submit(
        &self,
        cart: &mut CartState,
        customer: CustomerDetails,
    ) -> Result<Order, ClientError> {
        if customer.name.trim().is_empty() {
            return Err(ClientError::MissingCustomerField("name"));
        }
        if customer.email.trim().is_empty() {
            return Err(ClientError::MissingCustomerField("email"));
        }
        if cart.is_empty() {
            return Err(ClientError::EmptyCart);
        }

        let summary = self.summary(cart).await?;
        let draft = OrderDraft {
            items: cart.items().to_vec(),
            total_amount: summary.total,
            customer_name: customer.name,
            customer_email: customer.email,
            status: OrderStatus::Pending,
            payment_method: customer.payment_method,
        };

        let order = self.client.create_order(&draft).await?;
        tracing::info!(order_id = %order.id, "order submitted");
        cart.clear();
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use vitrine_commerce::catalog::Category;
    use vitrine_commerce::ids::{OrderId, ProductId};

    struct StubClient {
        products: HashMap<String, Product>,
        fail_orders: AtomicBool,
    }

    impl StubClient {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products: products
                    .into_iter()
                    .map(|p| (p.id.as_str().to_string(), p))
                    .collect(),
                fail_orders: AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl CatalogClient for StubClient {
        async fn product(&self, id: &ProductId) -> Result<Option<Product>, ClientError> {
            Ok(self.products.get(id.as_str()).cloned())
        }
    }

    #[async_trait]
    impl OrderClient for StubClient {
        async fn create_order(&self, draft: &OrderDraft) -> Result<Order, ClientError> {
            if self.fail_orders.load(Ordering::SeqCst) {
                return Err(ClientError::Api("Failed to create order".to_string()));
            }
            Ok(Order {
                id: OrderId::new("stub12345"),
                items: draft.items.clone(),
                total_amount: draft.total_amount,
                customer_name: draft.customer_name.clone(),
                customer_email: draft.customer_email.clone(),
                status: draft.status,
                payment_method: draft.payment_method,
                created_at: 1,
            })
        }
    }

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Produto {id}"),
            description: "Descrição".to_string(),
            price: Money::from_decimal(price),
            category: Category::Ebooks,
            image_url: "https://example.com/img.png".to_string(),
            download_url: "/downloads/test".to_string(),
            file_size: None,
            format: None,
            featured: false,
            tags: Vec::new(),
            created_at: 1,
        }
    }

    fn cart() -> CartState {
        CartState::restore(Box::new(MemoryStorage::new()))
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Ana Silva".to_string(),
            email: "ana@example.com".to_string(),
            payment_method: PaymentMethod::Pix,
        }
    }

    #[tokio::test]
    async fn test_summary_totals_price_times_quantity() {
        let flow = CheckoutFlow::new(StubClient::new(vec![
            product("1", 197.0),
            product("2", 47.0),
        ]));
        let mut cart = cart();
        cart.add(ProductId::new("1"), 2);
        cart.add(ProductId::new("2"), 1);

        let summary = flow.summary(&cart).await.unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.total, Money::from_decimal(441.0));
    }

    #[tokio::test]
    async fn test_missing_product_contributes_zero() {
        let flow = CheckoutFlow::new(StubClient::new(vec![product("1", 100.0)]));
        let mut cart = cart();
        cart.add(ProductId::new("1"), 1);
        cart.add(ProductId::new("gone"), 3);

        let summary = flow.summary(&cart).await.unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total, Money::from_decimal(100.0));
    }

    #[tokio::test]
    async fn test_submit_clears_cart_on_success() {
        let flow = CheckoutFlow::new(StubClient::new(vec![product("1", 100.0)]));
        let mut cart = cart();
        cart.add(ProductId::new("1"), 2);

        let order = flow.submit(&mut cart, customer()).await.unwrap();
        assert_eq!(order.total_amount, Money::from_decimal(200.0));
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_submit_preserves_cart_on_failure() {
        let client = StubClient::new(vec![product("1", 100.0)]);
        client.fail_orders.store(true, Ordering::SeqCst);
        let flow = CheckoutFlow::new(client);

        let mut cart = cart();
        cart.add(ProductId::new("1"), 2);

        let err = flow.submit(&mut cart, customer()).await.unwrap_err();
        assert!(matches!(err, ClientError::Api(_)));
        assert_eq!(cart.total_items(), 2);
    }

    #[tokio::test]
    async fn test_submit_requires_customer_fields_and_items() {
        let flow = CheckoutFlow::new(StubClient::new(vec![product("1", 100.0)]));

        let mut empty = cart();
        let err = flow.submit(&mut empty, customer()).await.unwrap_err();
        assert!(matches!(err, ClientError::EmptyCart));

        let mut cart = cart();
        cart.add(ProductId::new("1"), 1);

        let mut no_name = customer();
        no_name.name = "  ".to_string();
        let err = flow.submit(&mut cart, no_name).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCustomerField("name")));

        let mut no_email = customer();
        no_email.email = String::new();
        let err = flow.submit(&mut cart, no_email).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingCustomerField("email")));

        // Failed attempts left the cart intact.
        assert_eq!(cart.total_items(), 1);
    }
}
