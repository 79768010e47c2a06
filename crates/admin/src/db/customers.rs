//! Customer repository.
//!
//! Deleting a customer does not touch orders that reference it.

use tracing::{debug, instrument};

use backoffice_core::CustomerId;

use super::collection::Collection;
use super::{Backend, RepositoryError, seed};
use crate::models::{CreateCustomer, Customer, CustomerPatch};
use crate::storage::keys;

/// Simulated round-trip per operation, in milliseconds.
mod latency {
    pub const LIST: u64 = 350;
    pub const GET: u64 = 200;
    pub const CREATE: u64 = 250;
    pub const UPDATE: u64 = 250;
    pub const DELETE: u64 = 200;
}

/// Repository for the customer collection.
pub struct CustomerRepository<'a> {
    backend: &'a Backend,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    fn collection(&self) -> Collection<'a, Customer> {
        Collection::new(self.backend.storage(), keys::CUSTOMERS, seed::customers)
    }

    /// Write the demo customers if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the seed cannot be written.
    pub fn ensure_seeded(&self) -> Result<(), RepositoryError> {
        self.collection().ensure_seeded()
    }

    /// List all customers in stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::LIST).await;
        Ok(self.collection().read())
    }

    /// Get a customer by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::GET).await;
        Ok(self.collection().find(id))
    }

    /// Create a customer.
    ///
    /// The input is expected to have been validated by the caller.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn create(&self, input: CreateCustomer) -> Result<Customer, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::CREATE).await;

        let customer = Customer {
            id: CustomerId::generate(),
            name: input.name,
            email: input.email,
            segment: input.segment,
            created_at: self.backend.clock().today(),
        };
        let created = self.collection().append(customer)?;
        debug!(id = %created.id, "Created customer");
        Ok(created)
    }

    /// Shallow-merge `patch` into the customer with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has that ID.
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: &CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::UPDATE).await;
        self.collection().modify(id, |c| c.apply(patch))
    }

    /// Delete the customer with `id`. Deleting an unknown ID is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &CustomerId) -> Result<(), RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::DELETE).await;
        let removed = self.collection().remove(id)?;
        debug!(removed, "Deleted customer");
        Ok(())
    }
}
