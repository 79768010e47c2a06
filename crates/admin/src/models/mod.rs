//! Domain models for the backoffice.
//!
//! Each entity is persisted as a camelCase JSON object inside its
//! collection array. Input types (`Create*`, `*Patch`) carry a `validated()`
//! step that callers run before handing them to a repository; repositories
//! themselves never validate.

pub mod customer;
pub mod order;
pub mod product;
pub mod session;

use thiserror::Error;

use backoffice_core::EmailError;

pub use customer::{CreateCustomer, Customer, CustomerPatch};
pub use order::{Order, OrderSummary};
pub use product::{CreateProduct, Product, ProductPatch};
pub use session::{Session, SessionUser};

/// Malformed create/update input, detected before reaching a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{0} is required")]
    Required(&'static str),

    /// A price must be strictly positive.
    #[error("price must be greater than zero")]
    NonPositivePrice,

    /// The email address is malformed.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// A persisted entity with a collection-unique identifier.
pub trait Record: Clone + serde::Serialize + serde::de::DeserializeOwned {
    /// Identifier type.
    type Id: PartialEq + std::fmt::Display;

    /// Human-readable entity name used in errors and logs.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}

/// Trim a required text field, rejecting empty input.
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_owned())
}
