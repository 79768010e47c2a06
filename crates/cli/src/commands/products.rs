//! Product commands.

use rust_decimal::Decimal;

use backoffice_admin::db::ProductRepository;
use backoffice_admin::error::AppError;
use backoffice_admin::filters::ListFilter;
use backoffice_admin::models::{CreateProduct, Product, ProductPatch};
use backoffice_admin::views::{ListPage, Notification};
use backoffice_core::{ProductId, ProductStatus, format_money};

use super::{Context, notify};

#[allow(clippy::print_stdout)]
fn print_row(product: &Product) {
    let flag = if product.is_low_stock() { " low" } else { "" };
    println!(
        "{:<10} {:<24} {:<18} {:>9} {:>6}{flag:<4} {:<8} {}",
        product.id.as_str(),
        product.name,
        product.sku,
        format_money(product.price),
        product.stock,
        product.status,
        product.created_at
    );
}

/// List products matching the search and status.
#[allow(clippy::print_stdout)]
pub async fn list(
    ctx: &Context,
    search: &str,
    status: Option<ProductStatus>,
) -> Result<(), AppError> {
    ctx.require_session()?;
    let products = ProductRepository::new(&ctx.backend).list().await?;
    let page = ListPage::with_rows(products, ListFilter::new(search, status));

    let visible = page.visible();
    for product in &visible {
        print_row(product);
    }
    println!("{} of {} products", visible.len(), page.total());
    Ok(())
}

/// Show one product.
pub async fn show(ctx: &Context, id: &str) -> Result<(), AppError> {
    ctx.require_session()?;
    let product = ProductRepository::new(&ctx.backend)
        .get_by_id(&ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;
    print_row(&product);
    Ok(())
}

/// Create a product with zero stock.
#[allow(clippy::print_stdout)]
pub async fn create(ctx: &Context, name: String, price: Decimal) -> Result<(), AppError> {
    ctx.require_writer()?;
    let input = CreateProduct { name, price }.validated()?;
    let product = ProductRepository::new(&ctx.backend).create(input).await?;
    notify(&Notification::success("Product created"));
    print_row(&product);
    Ok(())
}

/// Apply a partial update.
#[allow(clippy::print_stdout)]
pub async fn update(ctx: &Context, id: &str, patch: ProductPatch) -> Result<(), AppError> {
    ctx.require_writer()?;
    let patch = patch.validated()?;
    let product = ProductRepository::new(&ctx.backend)
        .update(&ProductId::new(id), patch)
        .await?;
    notify(&Notification::success("Product updated"));
    print_row(&product);
    Ok(())
}

/// Delete a product. Unknown IDs succeed silently.
pub async fn delete(ctx: &Context, id: &str) -> Result<(), AppError> {
    ctx.require_writer()?;
    ProductRepository::new(&ctx.backend)
        .delete(&ProductId::new(id))
        .await?;
    notify(&Notification::success("Product deleted"));
    Ok(())
}
