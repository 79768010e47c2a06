//! Order commands. Orders are read-only apart from their status.

use backoffice_admin::db::OrderRepository;
use backoffice_admin::error::AppError;
use backoffice_admin::filters::ListFilter;
use backoffice_admin::models::Order;
use backoffice_admin::views::ListPage;
use backoffice_core::{CustomerId, OrderId, OrderStatus, format_money};

use super::Context;

#[allow(clippy::print_stdout)]
pub(super) fn print_row(order: &Order) {
    println!(
        "{:<6} {:<10} {:<18} {:>10} {:<8} {}",
        order.id.as_str(),
        order.number,
        order.customer_name,
        format_money(order.total),
        order.status,
        order.created_at
    );
}

/// List orders matching the search and status.
#[allow(clippy::print_stdout)]
pub async fn list(ctx: &Context, search: &str, status: Option<OrderStatus>) -> Result<(), AppError> {
    ctx.require_session()?;
    let orders = OrderRepository::new(&ctx.backend).list().await?;
    let page = ListPage::with_rows(orders, ListFilter::new(search, status));

    let visible = page.visible();
    for order in &visible {
        print_row(order);
    }
    println!("{} of {} orders", visible.len(), page.total());
    Ok(())
}

/// Show one order.
pub async fn show(ctx: &Context, id: &str) -> Result<(), AppError> {
    ctx.require_session()?;
    let order = OrderRepository::new(&ctx.backend)
        .get_by_id(&OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;
    print_row(&order);
    Ok(())
}

/// List the orders of one customer.
#[allow(clippy::print_stdout)]
pub async fn by_customer(ctx: &Context, customer_id: &str) -> Result<(), AppError> {
    ctx.require_session()?;
    let orders = OrderRepository::new(&ctx.backend)
        .list_by_customer_id(&CustomerId::new(customer_id))
        .await?;
    if orders.is_empty() {
        println!("No orders for this customer");
    }
    for order in &orders {
        print_row(order);
    }
    Ok(())
}

/// Change an order's status.
#[allow(clippy::print_stdout)]
pub async fn set_status(ctx: &Context, id: &str, status: OrderStatus) -> Result<(), AppError> {
    ctx.require_writer()?;
    let order = OrderRepository::new(&ctx.backend)
        .update_status(&OrderId::new(id), status)
        .await?;
    println!("Order {} is now {}", order.number, order.status);
    Ok(())
}
