//! The order store.

use rand::Rng;
use vitrine_commerce::ids::OrderId;
use vitrine_commerce::order::{Order, OrderDraft, OrderStatus};

/// Length of generated order id tokens. Nine base-36 characters give a
/// 36^9 identifier space, enough for collisions to be negligible here.
const ORDER_ID_LEN: usize = 9;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// In-memory holder of submitted orders.
///
/// Orders are append-only except for the status field.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a draft, assigning a fresh id and creation timestamp.
    ///
    /// Returns the stored order.
    pub fn create(&mut self, draft: OrderDraft) -> Order {
        let order = Order {
            id: generate_order_id(),
            items: draft.items,
            total_amount: draft.total_amount,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            status: draft.status,
            payment_method: draft.payment_method,
            created_at: current_timestamp(),
        };
        self.orders.push(order.clone());
        order
    }

    /// Look up an order by id.
    pub fn get_by_id(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Mutate an order's status in place.
    ///
    /// Returns the updated order, or `None` if no order matches. Callers
    /// are responsible for rejecting status values outside the enum before
    /// reaching the store.
    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> Option<Order> {
        let order = self.orders.iter_mut().find(|o| &o.id == id)?;
        order.status = status;
        Some(order.clone())
    }

    /// Number of stored orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders have been stored.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Generate a random lowercase base-36 order id token.
fn generate_order_id() -> OrderId {
    let mut rng = rand::thread_rng();
    let token: String = (0..ORDER_ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    OrderId::new(token)
}

/// Get current Unix timestamp in seconds.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::cart::CartItem;
    use vitrine_commerce::ids::ProductId;
    use vitrine_commerce::money::Money;
    use vitrine_commerce::order::PaymentMethod;

    fn draft() -> OrderDraft {
        OrderDraft {
            items: vec![CartItem {
                product_id: ProductId::new("1"),
                quantity: 2,
            }],
            total_amount: Money::from_decimal(394.0),
            customer_name: "Ana Silva".to_string(),
            customer_email: "ana@example.com".to_string(),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Pix,
        }
    }

    #[test]
    fn test_create_assigns_id_and_timestamp() {
        let mut store = OrderStore::new();
        let order = store.create(draft());

        assert_eq!(order.id.as_str().len(), ORDER_ID_LEN);
        assert!(order
            .id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        assert!(order.created_at > 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = OrderStore::new();
        let created = store.create(draft());

        let found = store.get_by_id(&created.id).unwrap();
        assert_eq!(found, &created);
        assert!(store.get_by_id(&OrderId::new("missing123")).is_none());
    }

    #[test]
    fn test_update_status_mutates_in_place() {
        let mut store = OrderStore::new();
        let created = store.create(draft());

        let updated = store
            .update_status(&created.id, OrderStatus::Completed)
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Completed);
        assert_eq!(
            store.get_by_id(&created.id).unwrap().status,
            OrderStatus::Completed
        );
    }

    #[test]
    fn test_update_status_unknown_id() {
        let mut store = OrderStore::new();
        assert!(store
            .update_status(&OrderId::new("missing123"), OrderStatus::Failed)
            .is_none());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let mut store = OrderStore::new();
        let a = store.create(draft());
        let b = store.create(draft());
        assert_ne!(a.id, b.id);
    }
}
