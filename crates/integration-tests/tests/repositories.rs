//! Integration tests for the product, order and customer repositories.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use backoffice_admin::db::{CustomerRepository, OrderRepository, ProductRepository, RepositoryError};
use backoffice_admin::models::{CreateCustomer, CreateProduct, CustomerPatch, ProductPatch};
use backoffice_core::{CustomerId, CustomerSegment, OrderId, OrderStatus, ProductId, ProductStatus};
use backoffice_integration_tests::TestContext;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_product_create_then_get() {
    let ctx = TestContext::new().unwrap();
    let repo = ProductRepository::new(&ctx.backend);

    let input = CreateProduct {
        name: "Milkshake".to_string(),
        price: dec("4.75"),
    }
    .validated()
    .unwrap();
    let created = repo.create(input).await.unwrap();

    assert_eq!(created.stock, 0);
    assert_eq!(created.status, ProductStatus::Active);
    assert_eq!(created.created_at, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(repo.get_by_id(&created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_product_update_merges_only_given_fields() {
    let ctx = TestContext::new().unwrap();
    let repo = ProductRepository::new(&ctx.backend);
    let id = ProductId::new("1");

    let patch = ProductPatch {
        stock: Some(7),
        ..ProductPatch::default()
    };
    let updated = repo.update(&id, patch).await.unwrap();

    assert_eq!(updated.stock, 7);
    assert_eq!(updated.name, "Classic Burger");
    assert_eq!(updated.price, dec("8.5"));
    assert!(updated.is_low_stock());
}

#[tokio::test]
async fn test_product_update_unknown_id_fails() {
    let ctx = TestContext::new().unwrap();
    let err = ProductRepository::new(&ctx.backend)
        .update(&ProductId::new("nope"), ProductPatch::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound { kind: "Product", .. }));
    assert_eq!(err.to_string(), "Product not found");
}

#[tokio::test]
async fn test_product_delete_unknown_id_is_noop() {
    let ctx = TestContext::new().unwrap();
    let repo = ProductRepository::new(&ctx.backend);

    repo.delete(&ProductId::new("nope")).await.unwrap();
    assert_eq!(repo.list().await.unwrap().len(), 3);

    repo.delete(&ProductId::new("2")).await.unwrap();
    let ids: Vec<_> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_order_status_change_persists() {
    let ctx = TestContext::new().unwrap();
    let repo = OrderRepository::new(&ctx.backend);

    repo.update_status(&OrderId::new("o1"), OrderStatus::Paid)
        .await
        .unwrap();

    let order = repo.get_by_id(&OrderId::new("o1")).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.number, "ORD-10001");
}

#[tokio::test]
async fn test_order_status_unknown_id_fails() {
    let ctx = TestContext::new().unwrap();
    let err = OrderRepository::new(&ctx.backend)
        .update_status(&OrderId::new("o9"), OrderStatus::Shipped)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Order not found");
}

// =============================================================================
// Customers
// =============================================================================

#[tokio::test]
async fn test_customer_crud_round() {
    let ctx = TestContext::new().unwrap();
    let repo = CustomerRepository::new(&ctx.backend);

    let input = CreateCustomer::parse("Umbrella", "info@umbrella.com", CustomerSegment::Mid).unwrap();
    let created = repo.create(input).await.unwrap();
    assert_eq!(created.created_at, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

    let patch = CustomerPatch::parse(None, None, Some(CustomerSegment::Enterprise)).unwrap();
    let updated = repo.update(&created.id, patch).await.unwrap();
    assert_eq!(updated.segment, CustomerSegment::Enterprise);
    assert_eq!(updated.email.as_str(), "info@umbrella.com");

    repo.delete(&created.id).await.unwrap();
    assert_eq!(repo.get_by_id(&created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_deleting_customer_keeps_their_orders() {
    let ctx = TestContext::new().unwrap();
    let customers = CustomerRepository::new(&ctx.backend);
    let orders = OrderRepository::new(&ctx.backend);
    let acme = CustomerId::new("c1");

    customers.delete(&acme).await.unwrap();

    assert_eq!(customers.get_by_id(&acme).await.unwrap(), None);
    let orphaned = orders.list_by_customer_id(&acme).await.unwrap();
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].customer_name, "Acme Corp");
}

#[tokio::test]
async fn test_customer_rename_does_not_touch_order_snapshot() {
    let ctx = TestContext::new().unwrap();
    let patch = CustomerPatch::parse(Some("Globex International"), None, None).unwrap();
    CustomerRepository::new(&ctx.backend)
        .update(&CustomerId::new("c2"), patch)
        .await
        .unwrap();

    let order = OrderRepository::new(&ctx.backend)
        .get_by_id(&OrderId::new("o2"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.customer_name, "Globex");
}
