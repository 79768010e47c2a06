//! Integration tests for the backoffice.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - File-backed storage, seeding and corruption recovery
//! - `repositories` - Product, order and customer operations end to end
//! - `auth_flow` - Login policy, session persistence, permissions
//! - `dashboard` - KPIs over seeded and mutated data
//!
//! Every test gets its own data directory, so tests run in parallel.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use backoffice_admin::db::{Backend, SessionStore};
use backoffice_admin::runtime::{FixedClock, Latency};
use backoffice_admin::storage::{FileStore, Storage, StorageError};

/// A file-backed backoffice in a temporary directory.
///
/// Latency is disabled and the clock is frozen at 2024-03-01 12:00 UTC.
pub struct TestContext {
    dir: TempDir,
    pub storage: Storage,
    pub backend: Backend,
    pub sessions: SessionStore,
}

impl TestContext {
    /// Create a context over a fresh temporary directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        let dir = TempDir::new()?;
        Self::over(dir)
    }

    /// Open a second context over the same directory, as a restarted
    /// process would.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be opened.
    pub fn reopen(self) -> Result<Self, StorageError> {
        Self::over(self.dir)
    }

    fn over(dir: TempDir) -> Result<Self, StorageError> {
        let storage = Storage::new(FileStore::open(dir.path())?);
        let clock = FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        );
        let backend = Backend::new(storage.clone())
            .with_latency(Latency::Instant)
            .with_clock(clock);

        Ok(Self {
            dir,
            sessions: SessionStore::new(storage.clone()),
            storage,
            backend,
        })
    }

    /// Path of the data directory.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
