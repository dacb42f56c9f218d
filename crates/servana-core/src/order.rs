//! Order records created on successful payment

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Provider;
use crate::money::Rate;

/// Order identifier, derived from the creation time in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId(String);

impl OrderId {
    pub fn from_created_at(created_at: DateTime<Utc>) -> Self {
        Self(created_at.timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of an order.
///
/// Orders are created `Confirmed` because payment has already succeeded.
/// `Pending` exists for completeness and is never produced by the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Statuses the order views offer as actions from this status
    pub fn available_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Confirmed => &[OrderStatus::Completed, OrderStatus::Cancelled],
            _ => &[],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A confirmed booking.
///
/// The provider is an embedded copy. `status` is the only field that changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub provider: Provider,
    pub payment_reference: String,
    pub created_at: DateTime<Utc>,
    pub amount: Rate,
    pub status: OrderStatus,
    pub service_name: String,
}

impl Order {
    /// Build the order recorded after the checkout reported success.
    pub fn confirmed(
        provider: &Provider,
        payment_reference: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: OrderId::from_created_at(created_at),
            provider: provider.clone(),
            payment_reference: payment_reference.into(),
            created_at,
            amount: provider.price,
            status: OrderStatus::Confirmed,
            service_name: provider.service_name.to_string(),
        }
    }

    /// Amount as shown to the user, e.g. `₹50/hr`
    pub fn amount_display(&self) -> String {
        self.amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROVIDERS;
    use chrono::TimeZone;

    #[test]
    fn test_confirmed_order_copies_provider_fields() {
        let provider = &PROVIDERS[0];
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();

        let order = Order::confirmed(provider, "pay_123", at);

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.payment_reference, "pay_123");
        assert_eq!(order.service_name, provider.service_name);
        assert_eq!(order.amount, provider.price);
        assert_eq!(order.provider, *provider);
        assert_eq!(order.created_at, at);
    }

    #[test]
    fn test_order_id_is_epoch_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(OrderId::from_created_at(at).as_str(), "1700000000123");
    }

    #[test]
    fn test_amount_display() {
        let order = Order::confirmed(&PROVIDERS[0], "pay_1", Utc::now());
        assert_eq!(order.amount_display(), "₹50/hr");
    }

    #[test]
    fn test_only_confirmed_offers_transitions() {
        assert_eq!(
            OrderStatus::Confirmed.available_transitions(),
            &[OrderStatus::Completed, OrderStatus::Cancelled]
        );
        assert!(OrderStatus::Pending.available_transitions().is_empty());
        assert!(OrderStatus::Completed.available_transitions().is_empty());
        assert!(OrderStatus::Cancelled.available_transitions().is_empty());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
    }
}
