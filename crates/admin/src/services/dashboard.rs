//! Dashboard KPIs derived from the order and product collections.

use std::cmp::Reverse;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use backoffice_core::OrderStatus;

use crate::db::{Backend, OrderRepository, ProductRepository, RepositoryError};
use crate::models::{Order, OrderSummary, Product};

/// How many entries the top-products and last-orders lists hold.
pub const LIST_LIMIT: usize = 5;

/// Order counts per status. Every status is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub paid: usize,
    pub shipped: usize,
}

impl StatusCounts {
    /// Count for one status.
    #[must_use]
    pub const fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Paid => self.paid,
            OrderStatus::Shipped => self.shipped,
        }
    }

    const fn bump(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Paid => self.paid += 1,
            OrderStatus::Shipped => self.shipped += 1,
        }
    }
}

/// The customer with the highest summed order total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCustomer {
    pub name: String,
    pub total: Decimal,
}

/// A product in the inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockEntry {
    pub name: String,
    pub stock: u32,
}

/// Dashboard key performance indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub revenue: Decimal,
    pub total_orders: usize,
    pub orders_by_status: StatusCounts,
    pub active_products: usize,
    pub low_stock_products: usize,
    pub top_customer: Option<TopCustomer>,
    pub top_products: Vec<StockEntry>,
    pub last_orders: Vec<OrderSummary>,
}

/// Derive the dashboard KPIs. Pure; inputs are not modified.
///
/// Sums saturate at the `Decimal` bounds instead of overflowing.
#[must_use]
pub fn compute_kpis(orders: &[Order], products: &[Product]) -> Kpis {
    let revenue = orders
        .iter()
        .fold(Decimal::ZERO, |sum, o| sum.saturating_add(o.total));

    let mut orders_by_status = StatusCounts::default();
    for order in orders {
        orders_by_status.bump(order.status);
    }

    let active_products = products
        .iter()
        .filter(|p| p.status == backoffice_core::ProductStatus::Active)
        .count();
    let low_stock_products = products.iter().filter(|p| p.is_low_stock()).count();

    Kpis {
        revenue,
        total_orders: orders.len(),
        orders_by_status,
        active_products,
        low_stock_products,
        top_customer: top_customer(orders),
        top_products: top_products(products),
        last_orders: last_orders(orders),
    }
}

/// Totals are grouped by the denormalized customer name. On equal totals the
/// customer seen first in `orders` wins.
fn top_customer(orders: &[Order]) -> Option<TopCustomer> {
    let mut totals: Vec<(&str, Decimal)> = Vec::new();
    for order in orders {
        match totals.iter_mut().find(|(name, _)| *name == order.customer_name) {
            Some((_, total)) => *total = total.saturating_add(order.total),
            None => totals.push((&order.customer_name, order.total)),
        }
    }

    let mut best: Option<(&str, Decimal)> = None;
    for (name, total) in totals {
        if best.is_none_or(|(_, top)| total > top) {
            best = Some((name, total));
        }
    }

    best.map(|(name, total)| TopCustomer {
        name: name.to_owned(),
        total,
    })
}

fn top_products(products: &[Product]) -> Vec<StockEntry> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    // Stable sort keeps input order among equal stock.
    sorted.sort_by_key(|p| Reverse(p.stock));
    sorted
        .into_iter()
        .take(LIST_LIMIT)
        .map(|p| StockEntry {
            name: p.name.clone(),
            stock: p.stock,
        })
        .collect()
}

fn last_orders(orders: &[Order]) -> Vec<OrderSummary> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.number.cmp(&a.number))
    });
    sorted
        .into_iter()
        .take(LIST_LIMIT)
        .map(OrderSummary::from)
        .collect()
}

/// Loads both collections and computes the KPIs.
pub struct DashboardService<'a> {
    orders: OrderRepository<'a>,
    products: ProductRepository<'a>,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self {
            orders: OrderRepository::new(backend),
            products: ProductRepository::new(backend),
        }
    }

    /// Fetch orders and products concurrently and derive the KPIs.
    ///
    /// # Errors
    ///
    /// Returns the first `RepositoryError` from either fetch.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Kpis, RepositoryError> {
        let (orders, products) = tokio::join!(self.orders.list(), self.products.list());
        Ok(compute_kpis(&orders?, &products?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::NaiveDate;

    use backoffice_core::{CustomerId, OrderId, ProductId, ProductStatus};

    use super::*;
    use crate::runtime::Latency;
    use crate::storage::Storage;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn order(number: &str, customer: &str, total: &str, status: OrderStatus, date: &str) -> Order {
        Order {
            id: OrderId::new(format!("id-{number}")),
            number: number.to_string(),
            customer_id: CustomerId::new(customer.to_lowercase()),
            customer_name: customer.to_string(),
            total: dec(total),
            status,
            created_at: date.parse::<NaiveDate>().unwrap(),
        }
    }

    fn product(name: &str, stock: u32, status: ProductStatus) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_string(),
            sku: format!("SKU-{name}"),
            price: Decimal::ONE,
            stock,
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_empty_inputs() {
        let kpis = compute_kpis(&[], &[]);
        assert_eq!(kpis.revenue, Decimal::ZERO);
        assert_eq!(kpis.total_orders, 0);
        assert_eq!(kpis.orders_by_status, StatusCounts::default());
        assert_eq!(kpis.active_products, 0);
        assert_eq!(kpis.low_stock_products, 0);
        assert_eq!(kpis.top_customer, None);
        assert!(kpis.top_products.is_empty());
        assert!(kpis.last_orders.is_empty());
    }

    #[test]
    fn test_revenue_status_counts_and_recency() {
        let orders = [
            order("A", "Acme", "100", OrderStatus::Pending, "2024-01-01"),
            order("B", "Globex", "50", OrderStatus::Paid, "2024-01-02"),
        ];
        let kpis = compute_kpis(&orders, &[]);

        assert_eq!(kpis.revenue, dec("150"));
        assert_eq!(kpis.total_orders, 2);
        assert_eq!(
            kpis.orders_by_status,
            StatusCounts {
                pending: 1,
                paid: 1,
                shipped: 0
            }
        );
        let numbers: Vec<_> = kpis.last_orders.iter().map(|o| o.number.as_str()).collect();
        assert_eq!(numbers, ["B", "A"]);
    }

    #[test]
    fn test_same_day_orders_sort_by_number_descending() {
        let orders = [
            order("ORD-1", "Acme", "1", OrderStatus::Paid, "2024-01-01"),
            order("ORD-3", "Acme", "1", OrderStatus::Paid, "2024-01-01"),
            order("ORD-2", "Acme", "1", OrderStatus::Paid, "2024-01-01"),
        ];
        let numbers: Vec<_> = compute_kpis(&orders, &[])
            .last_orders
            .into_iter()
            .map(|o| o.number)
            .collect();
        assert_eq!(numbers, ["ORD-3", "ORD-2", "ORD-1"]);
    }

    #[test]
    fn test_last_orders_capped() {
        let orders: Vec<_> = (1..=7)
            .map(|d| {
                order(
                    &format!("N{d}"),
                    "Acme",
                    "1",
                    OrderStatus::Pending,
                    &format!("2024-01-0{d}"),
                )
            })
            .collect();
        let kpis = compute_kpis(&orders, &[]);
        assert_eq!(kpis.last_orders.len(), LIST_LIMIT);
        assert_eq!(kpis.last_orders[0].number, "N7");
    }

    #[test]
    fn test_products_low_stock_and_ranking() {
        let products = [
            product("X", 5, ProductStatus::Active),
            product("Y", 50, ProductStatus::Inactive),
        ];
        let kpis = compute_kpis(&[], &products);

        assert_eq!(kpis.low_stock_products, 1);
        assert_eq!(kpis.active_products, 1);
        let names: Vec<_> = kpis.top_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Y", "X"]);
    }

    #[test]
    fn test_top_products_stable_and_capped() {
        let products: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|n| product(n, 10, ProductStatus::Active))
            .collect();
        let names: Vec<_> = compute_kpis(&[], &products)
            .top_products
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_top_customer_sums_per_name() {
        let orders = [
            order("1", "Acme", "60", OrderStatus::Paid, "2024-01-01"),
            order("2", "Globex", "100", OrderStatus::Paid, "2024-01-01"),
            order("3", "Acme", "60", OrderStatus::Paid, "2024-01-01"),
        ];
        assert_eq!(
            compute_kpis(&orders, &[]).top_customer,
            Some(TopCustomer {
                name: "Acme".to_string(),
                total: dec("120"),
            })
        );
    }

    #[test]
    fn test_top_customer_tie_keeps_first_seen() {
        let orders = [
            order("1", "Initech", "75", OrderStatus::Paid, "2024-01-01"),
            order("2", "Globex", "75", OrderStatus::Paid, "2024-01-01"),
        ];
        assert_eq!(
            compute_kpis(&orders, &[]).top_customer.unwrap().name,
            "Initech"
        );
    }

    #[test]
    fn test_huge_totals_saturate() {
        let orders = [
            order("1", "Acme", "50000000000000000000000000000", OrderStatus::Paid, "2024-01-01"),
            order("2", "Acme", "50000000000000000000000000000", OrderStatus::Paid, "2024-01-02"),
        ];
        let kpis = compute_kpis(&orders, &[]);

        assert_eq!(kpis.revenue, Decimal::MAX);
        assert_eq!(kpis.top_customer.unwrap().total, Decimal::MAX);
    }

    #[tokio::test]
    async fn test_load_over_seed_data() {
        let backend = Backend::new(Storage::in_memory()).with_latency(Latency::Instant);
        let kpis = DashboardService::new(&backend).load().await.unwrap();

        assert_eq!(kpis.revenue, dec("459.4"));
        assert_eq!(kpis.total_orders, 3);
        assert_eq!(kpis.active_products, 2);
        assert_eq!(kpis.low_stock_products, 0);
        assert_eq!(kpis.top_customer.unwrap().name, "Initech");
        assert_eq!(kpis.last_orders[0].number, "ORD-10003");
        assert_eq!(kpis.top_products[0].name, "Classic Burger");
    }
}
