//! Whole-array persistence shared by the entity repositories.
//!
//! The stored array is handled entry by entry. An entry that does not decode
//! into `T` is skipped when reading but kept verbatim when writing, so one
//! malformed record never hides or destroys the rest of the collection.

use serde_json::Value;
use tracing::{info, warn};

use super::RepositoryError;
use crate::models::Record;
use crate::storage::{Storage, StorageError};

/// One JSON array of records stored under a single key.
pub struct Collection<'a, T> {
    storage: &'a Storage,
    key: &'static str,
    seed: fn() -> Vec<T>,
}

impl<'a, T: Record> Collection<'a, T> {
    pub const fn new(storage: &'a Storage, key: &'static str, seed: fn() -> Vec<T>) -> Self {
        Self { storage, key, seed }
    }

    /// Raw stored entries; absent or non-array data reads as empty.
    fn entries(&self) -> Vec<Value> {
        self.storage.read_json_or(self.key, Vec::new())
    }

    fn decode(&self, entry: &Value) -> Option<T> {
        match T::deserialize(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key = self.key, error = %e, "Skipping malformed record");
                None
            }
        }
    }

    fn encode(record: &T) -> Result<Value, RepositoryError> {
        Ok(serde_json::to_value(record).map_err(StorageError::from)?)
    }

    fn write_entries(&self, entries: &[Value]) -> Result<(), RepositoryError> {
        self.storage.write_json(self.key, entries)?;
        Ok(())
    }

    /// All stored records that decode; malformed entries are skipped.
    pub fn read(&self) -> Vec<T> {
        self.entries().iter().filter_map(|e| self.decode(e)).collect()
    }

    /// Write the seed set if nothing is stored under the key.
    ///
    /// Never touches a non-empty array, even one whose entries all fail to
    /// decode, so repeated calls leave the stored bytes unchanged.
    pub fn ensure_seeded(&self) -> Result<(), RepositoryError> {
        if self.entries().is_empty() {
            let seed = (self.seed)();
            info!(key = self.key, records = seed.len(), "Seeding empty collection");
            self.storage.write_json(self.key, &seed)?;
        }
        Ok(())
    }

    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.read().into_iter().find(|r| r.id() == id)
    }

    pub fn append(&self, record: T) -> Result<T, RepositoryError> {
        let mut entries = self.entries();
        entries.push(Self::encode(&record)?);
        self.write_entries(&entries)?;
        Ok(record)
    }

    /// Apply `change` to the record with `id` and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no decodable record has that ID.
    pub fn modify(
        &self,
        id: &T::Id,
        change: impl FnOnce(&mut T),
    ) -> Result<T, RepositoryError> {
        let mut entries = self.entries();
        let (slot, mut record) = entries
            .iter_mut()
            .find_map(|entry| {
                let record = self.decode(entry)?;
                (record.id() == id).then_some((entry, record))
            })
            .ok_or_else(|| RepositoryError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        change(&mut record);
        *slot = Self::encode(&record)?;
        self.write_entries(&entries)?;
        Ok(record)
    }

    /// Remove every entry whose stored `id` matches; a missing ID is a silent no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&self, id: &T::Id) -> Result<bool, RepositoryError> {
        let wanted = id.to_string();
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|e| e.get("id").and_then(Value::as_str) != Some(wanted.as_str()));
        self.write_entries(&entries)?;
        Ok(entries.len() != before)
    }
}
