//! Dashboard KPI summary.

use backoffice_admin::error::AppError;
use backoffice_admin::services::{DashboardService, Kpis};
use backoffice_core::{OrderStatus, format_money};

use super::Context;

/// Load and print the KPIs.
#[allow(clippy::print_stdout)]
pub async fn show(ctx: &Context, json: bool) -> Result<(), AppError> {
    ctx.require_session()?;
    let kpis = DashboardService::new(&ctx.backend).load().await?;

    if json {
        let rendered = serde_json::to_string_pretty(&kpis)
            .map_err(backoffice_admin::storage::StorageError::from)?;
        println!("{rendered}");
    } else {
        print_kpis(&kpis);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_kpis(kpis: &Kpis) {
    println!("Revenue          {}", format_money(kpis.revenue));
    println!("Orders           {}", kpis.total_orders);
    for status in OrderStatus::ALL {
        println!("  {status:<14} {}", kpis.orders_by_status.get(status));
    }
    println!("Active products  {}", kpis.active_products);
    println!("Low stock        {}", kpis.low_stock_products);
    match &kpis.top_customer {
        Some(top) => println!("Top customer     {} ({})", top.name, format_money(top.total)),
        None => println!("Top customer     -"),
    }

    println!();
    println!("Top products by stock");
    for entry in &kpis.top_products {
        println!("  {:<24} {:>6}", entry.name, entry.stock);
    }

    println!();
    println!("Last orders");
    for order in &kpis.last_orders {
        println!(
            "  {:<10} {:<16} {:>10} {:<8} {}",
            order.number,
            order.customer_name,
            format_money(order.total),
            order.status,
            order.created_at
        );
    }
}
