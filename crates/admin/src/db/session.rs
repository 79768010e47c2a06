//! Persisted authentication session.

use serde_json::Value;
use tracing::{instrument, warn};

use crate::models::{Session, SessionUser};
use crate::storage::{Storage, StorageError, keys};

/// Reads and writes the single process-wide [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    /// Create a session store over `storage`.
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Read the stored session; never fails.
    ///
    /// Absent or malformed data yields the signed-out session. A non-boolean
    /// `isAuthenticated` counts as signed in only when it is truthy, and an
    /// unparseable `user` is dropped.
    #[must_use]
    pub fn read(&self) -> Session {
        let Some(Value::Object(raw)) = self.storage.read_json::<Value>(keys::AUTH) else {
            return Session::signed_out();
        };

        let is_authenticated = raw.get("isAuthenticated").is_some_and(truthy);
        let user = raw
            .get("user")
            .filter(|v| !v.is_null())
            .and_then(|v| match serde_json::from_value::<SessionUser>(v.clone()) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Stored session user is malformed, ignoring it");
                    None
                }
            });

        Session {
            is_authenticated,
            user,
        }
    }

    /// Persist `session`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    #[instrument(skip(self, session), fields(authenticated = session.is_authenticated))]
    pub fn write(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.write_json(keys::AUTH, session)
    }

    /// Forget the stored session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::AUTH)
    }
}

/// JavaScript-style truthiness, matching how the stored flag was produced.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
