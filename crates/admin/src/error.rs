//! Unified error handling for the backoffice.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::models::ValidationError;
use crate::services::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the backoffice front ends.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Login failed or the session could not be saved.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Input rejected before reaching a repository.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading user input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl AppError {
    /// Message suitable for showing to the user.
    ///
    /// Storage details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Storage(_) | Self::Repository(RepositoryError::Storage(_)) => {
                tracing::error!(error = %self, "Backoffice storage error");
                "Storage unavailable".to_string()
            }
            Self::Auth(AuthError::Storage(_)) => {
                tracing::error!(error = %self, "Backoffice session storage error");
                "Storage unavailable".to_string()
            }
            Self::Repository(e) => e.to_string(),
            Self::Auth(e) => e.to_string(),
            Self::Config(e) => e.to_string(),
            Self::Validation(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Forbidden(reason) => reason.clone(),
        }
    }

    /// Process exit code for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config(_) => 2,
            Self::NotFound(_) | Self::Repository(RepositoryError::NotFound { .. }) => 3,
            Self::Auth(AuthError::InvalidCredentials) | Self::Forbidden(_) => 4,
            Self::Storage(_) | Self::Repository(_) | Self::Auth(_) | Self::Io(_) => 1,
        }
    }
}
