//! Integration tests for the dashboard KPIs and list filtering.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use backoffice_admin::db::{CustomerRepository, OrderRepository, ProductRepository};
use backoffice_admin::filters::ListFilter;
use backoffice_admin::models::ProductPatch;
use backoffice_admin::services::{DashboardService, StatusCounts};
use backoffice_admin::views::ListPage;
use backoffice_core::{CustomerSegment, OrderId, OrderStatus, ProductId, format_money};
use backoffice_integration_tests::TestContext;

#[tokio::test]
async fn test_kpis_over_seed_data() {
    let ctx = TestContext::new().unwrap();
    let kpis = DashboardService::new(&ctx.backend).load().await.unwrap();

    assert_eq!(format_money(kpis.revenue), "$459.40");
    assert_eq!(kpis.total_orders, 3);
    assert_eq!(
        kpis.orders_by_status,
        StatusCounts {
            pending: 1,
            paid: 1,
            shipped: 1
        }
    );
    assert_eq!(kpis.active_products, 2);
    assert_eq!(kpis.low_stock_products, 0);

    let top = kpis.top_customer.unwrap();
    assert_eq!(top.name, "Initech");
    assert_eq!(top.total, "240".parse::<Decimal>().unwrap());

    let stock: Vec<_> = kpis.top_products.iter().map(|p| p.stock).collect();
    assert_eq!(stock, [120, 80, 45]);

    let numbers: Vec<_> = kpis.last_orders.iter().map(|o| o.number.as_str()).collect();
    assert_eq!(numbers, ["ORD-10003", "ORD-10002", "ORD-10001"]);
}

#[tokio::test]
async fn test_kpis_follow_mutations() {
    let ctx = TestContext::new().unwrap();
    ProductRepository::new(&ctx.backend)
        .update(
            &ProductId::new("2"),
            ProductPatch {
                stock: Some(3),
                ..ProductPatch::default()
            },
        )
        .await
        .unwrap();
    OrderRepository::new(&ctx.backend)
        .update_status(&OrderId::new("o1"), OrderStatus::Shipped)
        .await
        .unwrap();

    let kpis = DashboardService::new(&ctx.backend).load().await.unwrap();
    assert_eq!(kpis.low_stock_products, 1);
    assert_eq!(kpis.orders_by_status.get(OrderStatus::Pending), 0);
    assert_eq!(kpis.orders_by_status.get(OrderStatus::Shipped), 2);
    assert_eq!(kpis.top_products.last().unwrap().name, "Cheese Burger");
}

#[tokio::test]
async fn test_enterprise_segment_filter() {
    let ctx = TestContext::new().unwrap();
    let customers = CustomerRepository::new(&ctx.backend).list().await.unwrap();

    let matched = ListFilter::new("", Some(CustomerSegment::Enterprise)).apply(&customers);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Acme Corp");
}

#[tokio::test]
async fn test_list_page_over_repository() {
    let ctx = TestContext::new().unwrap();
    let repo = OrderRepository::new(&ctx.backend);

    let mut page = ListPage::loading();
    page.load(repo.list().await);
    page.filter = ListFilter::new(" acme ", None);
    assert_eq!(page.visible().len(), 1);

    let updated = repo
        .update_status(&OrderId::new("o1"), OrderStatus::Paid)
        .await
        .unwrap();
    page.apply_updated(updated);
    page.filter = ListFilter::new("", Some(OrderStatus::Paid));
    assert_eq!(page.visible().len(), 2);

    let err = repo
        .update_status(&OrderId::new("missing"), OrderStatus::Paid)
        .await
        .unwrap_err();
    let note = page.fail(&err);
    assert_eq!(note.message, "Order not found");
    assert_eq!(page.visible().len(), 2);
}
