//! Product repository.

use tracing::{debug, instrument};

use backoffice_core::{ProductId, ProductStatus};

use super::collection::Collection;
use super::{Backend, RepositoryError, seed};
use crate::models::{CreateProduct, Product, ProductPatch};
use crate::storage::keys;

/// Simulated round-trip per operation, in milliseconds.
mod latency {
    pub const LIST: u64 = 500;
    pub const GET: u64 = 300;
    pub const CREATE: u64 = 300;
    pub const UPDATE: u64 = 300;
    pub const DELETE: u64 = 300;
}

/// Repository for the product collection.
pub struct ProductRepository<'a> {
    backend: &'a Backend,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    fn collection(&self) -> Collection<'a, Product> {
        Collection::new(self.backend.storage(), keys::PRODUCTS, seed::products)
    }

    /// Write the demo products if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the seed cannot be written.
    pub fn ensure_seeded(&self) -> Result<(), RepositoryError> {
        self.collection().ensure_seeded()
    }

    /// List all products in stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::LIST).await;
        Ok(self.collection().read())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::GET).await;
        Ok(self.collection().find(id))
    }

    /// Create a product with zero stock, active status and a fresh SKU.
    ///
    /// The input is expected to have been validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn create(&self, input: CreateProduct) -> Result<Product, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::CREATE).await;

        let collection = self.collection();
        let existing = collection.read();
        let product = Product {
            id: ProductId::generate(),
            name: input.name.trim().to_owned(),
            sku: self.next_sku(&existing),
            price: input.price,
            stock: 0,
            status: ProductStatus::Active,
            created_at: self.backend.clock().today(),
        };

        let created = collection.append(product)?;
        debug!(id = %created.id, sku = %created.sku, "Created product");
        Ok(created)
    }

    /// Shallow-merge `patch` into the product with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that ID.
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Product, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::UPDATE).await;
        self.collection().modify(id, |p| p.apply(patch))
    }

    /// Delete the product with `id`. Deleting an unknown ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::DELETE).await;
        let removed = self.collection().remove(id)?;
        debug!(removed, "Deleted product");
        Ok(())
    }

    /// `SKU-<unix millis>`, bumped past any SKU already in the collection.
    fn next_sku(&self, existing: &[Product]) -> String {
        let mut stamp = self.backend.clock().now().timestamp_millis();
        loop {
            let candidate = format!("SKU-{stamp}");
            if !existing.iter().any(|p| p.sku == candidate) {
                return candidate;
            }
            stamp += 1;
        }
    }
}
