//! In-memory order store
//!
//! Most-recent-first sequence of orders. Lives for the process lifetime; there
//! is no removal and no persistence.

use servana_core::{Order, OrderId, OrderStatus};

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an order. No validation or duplicate-id detection.
    pub fn add_order(&mut self, order: Order) {
        tracing::info!(
            order_id = %order.id,
            service = %order.service_name,
            "Order added"
        );
        self.orders.insert(0, order);
    }

    /// Replace the status of the order with `order_id`.
    ///
    /// Unknown ids are ignored. Transition legality is the caller's concern.
    /// Returns `true` if an order was updated.
    pub fn update_order_status(&mut self, order_id: &OrderId, new_status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| &o.id == order_id) {
            Some(order) => {
                tracing::info!(
                    order_id = %order_id,
                    from = %order.status,
                    to = %new_status,
                    "Order status updated"
                );
                order.status = new_status;
                true
            }
            None => {
                tracing::debug!(order_id = %order_id, "Status update for unknown order ignored");
                false
            }
        }
    }

    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    /// Order at display position `index`
    pub fn get_index(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
