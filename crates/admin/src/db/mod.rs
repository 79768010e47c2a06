//! Repositories over the key-value store.
//!
//! # Collections
//!
//! - `products_v1` - [`ProductRepository`], full CRUD
//! - `orders_v1` - [`OrderRepository`], read plus status changes
//! - `customers_v1` - [`CustomerRepository`], full CRUD
//! - `auth_v1` - [`SessionStore`], the signed-in session
//!
//! Every collection operation first seeds the collection if it is empty,
//! then waits its simulated latency, then reads the whole array, mutates it
//! and writes it back. There is no per-record locking: two overlapping
//! mutations resolve last-write-wins at collection granularity.

mod collection;
pub mod customers;
pub mod orders;
pub mod products;
pub mod seed;
pub mod session;

use std::sync::Arc;

use thiserror::Error;

use crate::runtime::{Clock, Latency, SharedClock, SystemClock};
use crate::storage::{Storage, StorageError};

pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use session::SessionStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested entity was not found.
    #[error("{kind} not found")]
    NotFound {
        /// Entity kind (e.g., `Product`).
        kind: &'static str,
        /// The ID that was looked up.
        id: String,
    },
}

/// Everything a repository needs: the store, the latency mode and a clock.
///
/// Cheap to clone; plays the role a connection pool plays for a SQL backend.
#[derive(Clone)]
pub struct Backend {
    storage: Storage,
    latency: Latency,
    clock: SharedClock,
}

impl std::fmt::Debug for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backend")
            .field("storage", &self.storage)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

impl Backend {
    /// Backend over `storage` with simulated latency and the system clock.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            latency: Latency::Simulated,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the latency mode.
    #[must_use]
    pub const fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The underlying store.
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The latency mode.
    #[must_use]
    pub const fn latency(&self) -> Latency {
        self.latency
    }

    /// The clock used to stamp new records.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
