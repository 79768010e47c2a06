//! Command implementations.
//!
//! Every command runs against a [`Context`] opened over the file store in the
//! configured data directory.

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod theme;

use backoffice_admin::config::BackofficeConfig;
use backoffice_admin::db::{Backend, SessionStore};
use backoffice_admin::error::AppError;
use backoffice_admin::models::Session;
use backoffice_admin::storage::{FileStore, Storage};
use backoffice_admin::views::Notification;
use backoffice_core::ColorMode;

/// Shown when a viewer attempts a mutation.
pub const READ_ONLY_MESSAGE: &str = "Viewer role: read-only.";

/// Shared handles for one CLI invocation.
pub struct Context {
    pub backend: Backend,
    pub sessions: SessionStore,
    pub system_theme: ColorMode,
}

impl Context {
    /// Open the file store under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the data directory cannot be created.
    pub fn open(config: &BackofficeConfig) -> Result<Self, AppError> {
        let storage = Storage::new(FileStore::open(config.data_dir.clone())?);
        tracing::debug!(data_dir = %config.data_dir.display(), "Opened backoffice store");

        Ok(Self {
            backend: Backend::new(storage.clone()).with_latency(config.latency),
            sessions: SessionStore::new(storage),
            system_theme: config.system_theme,
        })
    }

    /// The stored session, if signed in.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` when nobody is signed in.
    pub fn require_session(&self) -> Result<Session, AppError> {
        let session = self.sessions.read();
        if !session.is_authenticated {
            return Err(AppError::Forbidden(
                "Not signed in. Run `bo-cli login` first.".to_string(),
            ));
        }
        Ok(session)
    }

    /// Refuse mutations unless the signed-in user is an admin.
    ///
    /// This mirrors the dashboard's read-only hint; the repositories
    /// themselves do not check roles.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` for signed-out users and viewers.
    pub fn require_writer(&self) -> Result<(), AppError> {
        if !self.require_session()?.can_write() {
            return Err(AppError::Forbidden(READ_ONLY_MESSAGE.to_string()));
        }
        Ok(())
    }
}

/// Print a mutation's confirmation.
#[allow(clippy::print_stdout)]
pub fn notify(note: &Notification) {
    println!("{}", note.message);
}
