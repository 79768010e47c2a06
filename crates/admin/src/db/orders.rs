//! Order repository.
//!
//! Orders only ever come from seed data; the sole mutation is a status change.

use tracing::{debug, instrument};

use backoffice_core::{CustomerId, OrderId, OrderStatus};

use super::collection::Collection;
use super::{Backend, RepositoryError, seed};
use crate::models::Order;
use crate::storage::keys;

/// Simulated round-trip per operation, in milliseconds.
mod latency {
    pub const LIST: u64 = 400;
    pub const GET: u64 = 250;
    pub const BY_CUSTOMER: u64 = 250;
    pub const UPDATE_STATUS: u64 = 250;
}

/// Repository for the order collection.
pub struct OrderRepository<'a> {
    backend: &'a Backend,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(backend: &'a Backend) -> Self {
        Self { backend }
    }

    fn collection(&self) -> Collection<'a, Order> {
        Collection::new(self.backend.storage(), keys::ORDERS, seed::orders)
    }

    /// Write the demo orders if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the seed cannot be written.
    pub fn ensure_seeded(&self) -> Result<(), RepositoryError> {
        self.collection().ensure_seeded()
    }

    /// List all orders in stored order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::LIST).await;
        Ok(self.collection().read())
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::GET).await;
        Ok(self.collection().find(id))
    }

    /// List the orders placed by `customer_id` (exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if seeding fails.
    #[instrument(skip(self))]
    pub async fn list_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Order>, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::BY_CUSTOMER).await;
        Ok(self
            .collection()
            .read()
            .into_iter()
            .filter(|o| &o.customer_id == customer_id)
            .collect())
    }

    /// Set the status of the order with `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has that ID.
    /// Returns `RepositoryError::Storage` if the collection cannot be written.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        self.ensure_seeded()?;
        self.backend.latency().wait(latency::UPDATE_STATUS).await;
        let updated = self.collection().modify(id, |o| o.status = status)?;
        debug!(number = %updated.number, %status, "Updated order status");
        Ok(updated)
    }
}
