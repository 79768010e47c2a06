//! Integration tests for file-backed persistence and seeding.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use backoffice_admin::db::{CustomerRepository, OrderRepository, ProductRepository};
use backoffice_admin::models::CreateProduct;
use backoffice_admin::storage::keys;
use backoffice_integration_tests::TestContext;

// =============================================================================
// Seeding
// =============================================================================

#[tokio::test]
async fn test_first_read_seeds_every_collection() {
    let ctx = TestContext::new().unwrap();

    assert_eq!(ProductRepository::new(&ctx.backend).list().await.unwrap().len(), 3);
    assert_eq!(OrderRepository::new(&ctx.backend).list().await.unwrap().len(), 3);
    assert_eq!(CustomerRepository::new(&ctx.backend).list().await.unwrap().len(), 3);

    for key in [keys::PRODUCTS, keys::ORDERS, keys::CUSTOMERS] {
        assert!(ctx.path().join(format!("{key}.json")).exists(), "{key} not written");
    }
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let ctx = TestContext::new().unwrap();
    let repo = ProductRepository::new(&ctx.backend);

    repo.ensure_seeded().unwrap();
    let first = ctx.storage.get_raw(keys::PRODUCTS).unwrap();
    repo.ensure_seeded().unwrap();
    let second = ctx.storage.get_raw(keys::PRODUCTS).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_seeding_never_overwrites_user_data() {
    let ctx = TestContext::new().unwrap();
    let repo = ProductRepository::new(&ctx.backend);

    let created = repo
        .create(
            CreateProduct {
                name: "Fries".to_string(),
                price: "3.5".parse().unwrap(),
            }
            .validated()
            .unwrap(),
        )
        .await
        .unwrap();
    repo.ensure_seeded().unwrap();

    let products = repo.list().await.unwrap();
    assert_eq!(products.len(), 4);
    assert!(products.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_corrupt_collection_is_reseeded() {
    let ctx = TestContext::new().unwrap();
    ctx.storage.set_raw(keys::CUSTOMERS, "not json at all").unwrap();

    let customers = CustomerRepository::new(&ctx.backend).list().await.unwrap();
    assert_eq!(customers.len(), 3);

    let stored: serde_json::Value =
        serde_json::from_str(&ctx.storage.get_raw(keys::CUSTOMERS).unwrap()).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_array_is_reseeded() {
    let ctx = TestContext::new().unwrap();
    ctx.storage.set_raw(keys::ORDERS, "[]").unwrap();

    let orders = OrderRepository::new(&ctx.backend).list().await.unwrap();
    assert_eq!(orders.len(), 3);
}

#[tokio::test]
async fn test_malformed_record_does_not_trigger_reseed() {
    let ctx = TestContext::new().unwrap();
    ctx.storage
        .set_raw(
            keys::PRODUCTS,
            r#"[{"id":"mine","name":"Fries","sku":"S-1","price":3,"stock":12,"status":"active","createdAt":"2024-01-01"},
                {"id":"mine2","name":"Half","sku":"S-2","price":3,"stock":2.5,"status":"active","createdAt":"2024-01-01"}]"#,
        )
        .unwrap();

    let products = ProductRepository::new(&ctx.backend).list().await.unwrap();
    let ids: Vec<_> = products.iter().map(|p| p.id.to_string()).collect();
    assert_eq!(ids, ["mine"]);

    let stored: serde_json::Value =
        serde_json::from_str(&ctx.storage.get_raw(keys::PRODUCTS).unwrap()).unwrap();
    let stored_ids: Vec<_> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(stored_ids, ["mine", "mine2"]);
}

// =============================================================================
// Persisted Shape
// =============================================================================

#[tokio::test]
async fn test_records_persist_as_camel_case_json() {
    let ctx = TestContext::new().unwrap();
    OrderRepository::new(&ctx.backend).ensure_seeded().unwrap();

    let raw = std::fs::read_to_string(ctx.path().join("orders_v1.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = stored.as_array().unwrap().first().unwrap();

    assert_eq!(first["customerId"], "c1");
    assert_eq!(first["customerName"], "Acme Corp");
    assert_eq!(first["createdAt"], "2024-02-01");
    assert_eq!(first["total"].as_f64(), Some(129.9));
}

#[tokio::test]
async fn test_lenient_amounts_are_coerced() {
    let ctx = TestContext::new().unwrap();
    ctx.storage
        .set_raw(
            keys::PRODUCTS,
            r#"[{"id":"p","name":"Odd","sku":"S","price":"12.50","stock":1,"status":"active","createdAt":"2024-01-01"},
                {"id":"q","name":"Bad","sku":"T","price":"abc","stock":1,"status":"active","createdAt":"2024-01-01"}]"#,
        )
        .unwrap();

    let products = ProductRepository::new(&ctx.backend).list().await.unwrap();
    assert_eq!(products[0].price, "12.5".parse::<Decimal>().unwrap());
    assert!(products[1].price.is_zero());
}

// =============================================================================
// Restart
// =============================================================================

#[tokio::test]
async fn test_changes_survive_reopen() {
    let ctx = TestContext::new().unwrap();
    let created = ProductRepository::new(&ctx.backend)
        .create(CreateProduct {
            name: "Onion Rings".to_string(),
            price: "4".parse().unwrap(),
        })
        .await
        .unwrap();

    let ctx = ctx.reopen().unwrap();
    let found = ProductRepository::new(&ctx.backend)
        .get_by_id(&created.id)
        .await
        .unwrap();
    assert_eq!(found, Some(created));
}
