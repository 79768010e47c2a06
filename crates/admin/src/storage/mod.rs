//! Key-value storage port.
//!
//! The backoffice persists everything as strings under a handful of named
//! keys (see [`keys`]). [`KeyValueStore`] is the synchronous port;
//! [`Storage`] wraps a shared store and adds the JSON conventions:
//! absent or unparseable values read as "no data" and are never surfaced
//! as errors.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - in-process map, used by tests
//! - [`FileStore`] - one file per key under a data directory, survives restarts

pub mod file;
pub mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys for the persisted collections and preferences.
pub mod keys {
    /// Authentication session (`{isAuthenticated, user}`).
    pub const AUTH: &str = "auth_v1";

    /// Product collection.
    pub const PRODUCTS: &str = "products_v1";

    /// Order collection.
    pub const ORDERS: &str = "orders_v1";

    /// Customer collection.
    pub const CUSTOMERS: &str = "customers_v1";

    /// Colour-mode preference, stored raw as `light` or `dark`.
    pub const COLOR_MODE: &str = "ui_color_mode_v1";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for writing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous, string-keyed store shared by the whole process.
///
/// No transactional guarantees span multiple keys.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a [`KeyValueStore`] with JSON helpers.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// A fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Read the raw string under `key`.
    ///
    /// Backend read failures are logged and reported as absent.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Storage read failed, treating as empty");
                None
            }
        }
    }

    /// Store a raw string under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    /// Read and parse the JSON value under `key`.
    ///
    /// Returns `None` when the key is absent, empty, or holds JSON that does
    /// not parse as `T`. Corrupt data is logged, never propagated.
    #[must_use]
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored JSON is corrupt, ignoring it");
                None
            }
        }
    }

    /// Read the JSON value under `key`, or `fallback` if there is no usable data.
    #[must_use]
    pub fn read_json_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        self.read_json(key).unwrap_or(fallback)
    }

    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.inner.set(key, &raw)
    }
}
