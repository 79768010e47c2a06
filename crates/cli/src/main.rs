//! Backoffice CLI - dashboard, catalog, orders and customers from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (viewer@company.com is read-only, anyone else is admin)
//! bo-cli login -e admin@company.com
//!
//! # Dashboard KPIs
//! bo-cli dashboard
//!
//! # Search active products
//! bo-cli products list -s burger --status active
//!
//! # Ship an order
//! bo-cli orders set-status o1 shipped
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - Demo session
//! - `dashboard` - KPI summary
//! - `products`, `orders`, `customers` - List, inspect and edit records
//! - `theme` - Light/dark preference
//!
//! State lives under `BACKOFFICE_DATA_DIR` (default `.backoffice`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backoffice_admin::config::BackofficeConfig;
use backoffice_admin::error::AppError;
use backoffice_core::{ColorMode, CustomerSegment, OrderStatus, ProductStatus};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Backoffice command-line tools")]
struct Cli {
    /// Skip simulated latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with the demo policy
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the current session
    Whoami,
    /// Show dashboard KPIs
    Dashboard {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Browse orders and change their status
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Light/dark colour mode
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this status (`active`, `inactive`)
        #[arg(long)]
        status: Option<ProductStatus>,
    },
    /// Show one product
    Show { id: String },
    /// Create a product
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        price: Decimal,
    },
    /// Update a product
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<Decimal>,

        #[arg(long)]
        stock: Option<u32>,

        #[arg(long)]
        status: Option<ProductStatus>,
    },
    /// Delete a product
    Delete { id: String },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Case-insensitive search over number and customer name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this status (`pending`, `paid`, `shipped`)
        #[arg(long)]
        status: Option<OrderStatus>,
    },
    /// Show one order
    Show { id: String },
    /// List a customer's orders
    ByCustomer { customer_id: String },
    /// Change an order's status
    SetStatus { id: String, status: OrderStatus },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List customers
    List {
        /// Case-insensitive search over name and email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only this segment (`smb`, `mid`, `enterprise`)
        #[arg(long)]
        segment: Option<CustomerSegment>,
    },
    /// Show one customer and their orders
    Show { id: String },
    /// Create a customer
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long, default_value = "smb")]
        segment: CustomerSegment,
    },
    /// Update a customer
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        segment: Option<CustomerSegment>,
    },
    /// Delete a customer (their orders are kept)
    Delete { id: String },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the mode in effect
    Show,
    /// Choose a mode explicitly
    Set { mode: ColorMode },
    /// Flip between light and dark
    Toggle,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match BackofficeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            report(&AppError::from(e));
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log_json);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize tracing with `EnvFilter`; JSON output when configured, text otherwise.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "backoffice_admin=warn,backoffice_cli=info".into());

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[allow(clippy::print_stderr)]
fn report(error: &AppError) {
    eprintln!("error: {}", error.user_message());
}

async fn run(cli: Cli, mut config: BackofficeConfig) -> Result<(), AppError> {
    if cli.instant {
        config.latency = backoffice_admin::runtime::Latency::Instant;
    }
    let ctx = Context::open(&config)?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&ctx, &email, password).await?;
        }
        Commands::Logout => commands::auth::logout(&ctx)?,
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Dashboard { json } => commands::dashboard::show(&ctx, json).await?,
        Commands::Products { action } => match action {
            ProductAction::List { search, status } => {
                commands::products::list(&ctx, &search, status).await?;
            }
            ProductAction::Show { id } => commands::products::show(&ctx, &id).await?,
            ProductAction::Create { name, price } => {
                commands::products::create(&ctx, name, price).await?;
            }
            ProductAction::Update {
                id,
                name,
                price,
                stock,
                status,
            } => {
                let patch = backoffice_admin::models::ProductPatch {
                    name,
                    price,
                    stock,
                    status,
                };
                commands::products::update(&ctx, &id, patch).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&ctx, &id).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List { search, status } => {
                commands::orders::list(&ctx, &search, status).await?;
            }
            OrderAction::Show { id } => commands::orders::show(&ctx, &id).await?,
            OrderAction::ByCustomer { customer_id } => {
                commands::orders::by_customer(&ctx, &customer_id).await?;
            }
            OrderAction::SetStatus { id, status } => {
                commands::orders::set_status(&ctx, &id, status).await?;
            }
        },
        Commands::Customers { action } => match action {
            CustomerAction::List { search, segment } => {
                commands::customers::list(&ctx, &search, segment).await?;
            }
            CustomerAction::Show { id } => commands::customers::show(&ctx, &id).await?,
            CustomerAction::Create {
                name,
                email,
                segment,
            } => commands::customers::create(&ctx, &name, &email, segment).await?,
            CustomerAction::Update {
                id,
                name,
                email,
                segment,
            } => {
                commands::customers::update(&ctx, &id, name.as_deref(), email.as_deref(), segment)
                    .await?;
            }
            CustomerAction::Delete { id } => commands::customers::delete(&ctx, &id).await?,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx),
            ThemeAction::Set { mode } => commands::theme::set(&ctx, mode),
            ThemeAction::Toggle => commands::theme::toggle(&ctx),
        },
    }
    Ok(())
}
