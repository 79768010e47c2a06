//! Product domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use backoffice_core::{ProductId, ProductStatus, money};

use super::{Record, ValidationError, required};

/// Products with stock strictly below this count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Stock keeping unit, generated on creation.
    pub sku: String,
    /// Unit price.
    #[serde(with = "money::lenient")]
    pub price: Decimal,
    /// Units on hand.
    pub stock: u32,
    /// Availability status.
    pub status: ProductStatus,
    /// Creation date.
    pub created_at: NaiveDate,
}

impl Product {
    /// Whether stock is below [`LOW_STOCK_THRESHOLD`].
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }

    /// Shallow-merge the fields present in `patch`.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Record for Product {
    type Id = ProductId;
    const KIND: &'static str = "Product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Input for creating a product. Stock starts at zero and status at active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProduct {
    pub name: String,
    pub price: Decimal,
}

impl CreateProduct {
    /// Check the input and return it normalized (trimmed name).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or the price is not positive.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = required(&self.name, "name")?;
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(Self {
            name,
            price: self.price,
        })
    }
}

/// Partial update for a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    /// Check the fields that are present and return the patch normalized.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a present name is blank or a present
    /// price is not positive.
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.map(|n| required(&n, "name")).transpose()?;
        if self.price.is_some_and(|p| p <= Decimal::ZERO) {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(Self { name, ..self })
    }
}
