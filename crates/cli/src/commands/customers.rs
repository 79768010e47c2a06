//! Customer commands.

use backoffice_admin::db::{CustomerRepository, OrderRepository};
use backoffice_admin::error::AppError;
use backoffice_admin::filters::ListFilter;
use backoffice_admin::models::{CreateCustomer, Customer, CustomerPatch};
use backoffice_admin::views::{ListPage, Notification};
use backoffice_core::{CustomerId, CustomerSegment};

use super::{Context, notify};

#[allow(clippy::print_stdout)]
fn print_row(customer: &Customer) {
    println!(
        "{:<10} {:<20} {:<26} {:<10} {}",
        customer.id.as_str(),
        customer.name,
        customer.email.as_str(),
        customer.segment,
        customer.created_at
    );
}

/// List customers matching the search and segment.
#[allow(clippy::print_stdout)]
pub async fn list(
    ctx: &Context,
    search: &str,
    segment: Option<CustomerSegment>,
) -> Result<(), AppError> {
    ctx.require_session()?;
    let customers = CustomerRepository::new(&ctx.backend).list().await?;
    let page = ListPage::with_rows(customers, ListFilter::new(search, segment));

    let visible = page.visible();
    for customer in &visible {
        print_row(customer);
    }
    println!("{} of {} customers", visible.len(), page.total());
    Ok(())
}

/// Show a customer followed by their orders.
#[allow(clippy::print_stdout)]
pub async fn show(ctx: &Context, id: &str) -> Result<(), AppError> {
    ctx.require_session()?;
    let id = CustomerId::new(id);
    let customers = CustomerRepository::new(&ctx.backend);
    let orders = OrderRepository::new(&ctx.backend);

    let (customer, orders) = tokio::join!(customers.get_by_id(&id), orders.list_by_customer_id(&id));
    let customer = customer?.ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

    print_row(&customer);
    println!();
    println!("Orders");
    for order in &orders? {
        super::orders::print_row(order);
    }
    Ok(())
}

/// Create a customer.
#[allow(clippy::print_stdout)]
pub async fn create(
    ctx: &Context,
    name: &str,
    email: &str,
    segment: CustomerSegment,
) -> Result<(), AppError> {
    ctx.require_writer()?;
    let input = CreateCustomer::parse(name, email, segment)?;
    let customer = CustomerRepository::new(&ctx.backend).create(input).await?;
    notify(&Notification::success("Customer created"));
    print_row(&customer);
    Ok(())
}

/// Apply a partial update.
#[allow(clippy::print_stdout)]
pub async fn update(
    ctx: &Context,
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
    segment: Option<CustomerSegment>,
) -> Result<(), AppError> {
    ctx.require_writer()?;
    let patch = CustomerPatch::parse(name, email, segment)?;
    let customer = CustomerRepository::new(&ctx.backend)
        .update(&CustomerId::new(id), patch)
        .await?;
    notify(&Notification::success("Customer updated"));
    print_row(&customer);
    Ok(())
}

/// Delete a customer. Their orders are left in place.
pub async fn delete(ctx: &Context, id: &str) -> Result<(), AppError> {
    ctx.require_writer()?;
    CustomerRepository::new(&ctx.backend)
        .delete(&CustomerId::new(id))
        .await?;
    notify(&Notification::success("Customer deleted"));
    Ok(())
}
