//! Order domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{CustomerId, OrderId, OrderStatus, money};

use super::Record;

/// A customer order.
///
/// `customer_name` is a snapshot taken when the order was placed; it is not
/// kept in sync with later customer renames, and `customer_id` is not
/// checked against the customer collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Display code (e.g., `ORD-10001`).
    pub number: String,
    /// Customer who placed the order.
    pub customer_id: CustomerId,
    /// Customer name at order time.
    pub customer_name: String,
    /// Order total.
    #[serde(with = "money::lenient")]
    pub total: Decimal,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Creation date.
    pub created_at: NaiveDate,
}

impl Record for Order {
    type Id = OrderId;
    const KIND: &'static str = "Order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// Display projection of an order used by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub number: String,
    pub customer_name: String,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: NaiveDate,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            number: order.number.clone(),
            customer_name: order.customer_name.clone(),
            total: order.total,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
