//! Demo data written into a collection the first time it is found empty.
//!
//! Seeds are kept as JSON in the persisted shape, so what lands in storage
//! is exactly what is written here.

use tracing::error;

use crate::models::{Customer, Order, Product};

const PRODUCTS: &str = r#"[
  {"id":"1","name":"Classic Burger","sku":"BURG-001","price":8.5,"stock":120,"status":"active","createdAt":"2024-01-10"},
  {"id":"2","name":"Cheese Burger","sku":"BURG-002","price":9.5,"stock":80,"status":"active","createdAt":"2024-01-12"},
  {"id":"3","name":"Vegan Burger","sku":"BURG-003","price":10,"stock":45,"status":"inactive","createdAt":"2024-01-20"}
]"#;

const ORDERS: &str = r#"[
  {"id":"o1","number":"ORD-10001","customerId":"c1","customerName":"Acme Corp","total":129.9,"status":"pending","createdAt":"2024-02-01"},
  {"id":"o2","number":"ORD-10002","customerId":"c2","customerName":"Globex","total":89.5,"status":"paid","createdAt":"2024-02-03"},
  {"id":"o3","number":"ORD-10003","customerId":"c3","customerName":"Initech","total":240,"status":"shipped","createdAt":"2024-02-05"}
]"#;

const CUSTOMERS: &str = r#"[
  {"id":"c1","name":"Acme Corp","email":"ops@acme.com","segment":"enterprise","createdAt":"2024-02-01"},
  {"id":"c2","name":"Globex","email":"admin@globex.com","segment":"mid","createdAt":"2024-02-03"},
  {"id":"c3","name":"Initech","email":"hello@initech.com","segment":"smb","createdAt":"2024-02-05"}
]"#;

fn parse<T: serde::de::DeserializeOwned>(name: &str, raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        error!(seed = name, error = %e, "Seed data does not parse");
        Vec::new()
    })
}

/// Seed products.
#[must_use]
pub fn products() -> Vec<Product> {
    parse("products", PRODUCTS)
}

/// Seed orders.
#[must_use]
pub fn orders() -> Vec<Order> {
    parse("orders", ORDERS)
}

/// Seed customers.
#[must_use]
pub fn customers() -> Vec<Customer> {
    parse("customers", CUSTOMERS)
}
