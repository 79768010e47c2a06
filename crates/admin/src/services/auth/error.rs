//! Authentication error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur during login and logout.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email or password failed the demo format check.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The session could not be persisted.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}
