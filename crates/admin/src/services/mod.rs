//! Business logic services for the backoffice.
//!
//! # Services
//!
//! - `auth` - Demo login policy and session lifecycle
//! - `color_mode` - Light/dark preference with system fallback
//! - `dashboard` - KPI aggregation over orders and products

pub mod auth;
pub mod color_mode;
pub mod dashboard;

pub use auth::{AuthError, AuthService, check_credentials};
pub use color_mode::ColorModePreference;
pub use dashboard::{DashboardService, Kpis, StatusCounts, StockEntry, TopCustomer, compute_kpis};
