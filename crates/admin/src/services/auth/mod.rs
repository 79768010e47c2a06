//! Demo authentication service.
//!
//! There is no credential backend. Login succeeds whenever the email looks
//! like an email and the password is long enough; the role is derived from
//! the email alone. This is a stand-in for real authentication and must not
//! be mistaken for one.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument};

use backoffice_core::{Email, Role};

use crate::db::SessionStore;
use crate::models::{Session, SessionUser};
use crate::runtime::Latency;

/// The one address that signs in as a read-only viewer.
pub const VIEWER_EMAIL: &str = "viewer@company.com";

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Display name given to every signed-in user.
pub const DEMO_USER_NAME: &str = "Demo User";

/// Simulated login round-trip, in milliseconds.
const LOGIN_LATENCY_MS: u64 = 500;

/// Apply the demo login policy to raw form input.
///
/// The email is trimmed and lowercased. Any other address than
/// [`VIEWER_EMAIL`] gets the admin role.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the email has no `@` or the
/// password is shorter than [`MIN_PASSWORD_LENGTH`].
pub fn check_credentials(email: &str, password: &SecretString) -> Result<SessionUser, AuthError> {
    let email = Email::parse_normalized(email).map_err(|_| AuthError::InvalidCredentials)?;
    if password.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::InvalidCredentials);
    }

    let role = if email.as_str() == VIEWER_EMAIL {
        Role::Viewer
    } else {
        Role::Admin
    };

    Ok(SessionUser {
        name: DEMO_USER_NAME.to_string(),
        email,
        role,
    })
}

/// Login, logout and current-session lookup.
pub struct AuthService<'a> {
    sessions: &'a SessionStore,
    latency: Latency,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(sessions: &'a SessionStore, latency: Latency) -> Self {
        Self { sessions, latency }
    }

    /// The stored session (signed out if none).
    #[must_use]
    pub fn current(&self) -> Session {
        self.sessions.read()
    }

    /// Check credentials and persist a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the policy rejects the input,
    /// or `AuthError::Storage` if the session cannot be saved.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<Session, AuthError> {
        self.latency.wait(LOGIN_LATENCY_MS).await;

        let user = check_credentials(email, password)?;
        info!(email = %user.email, role = %user.role, "Signed in");

        let session = Session::signed_in(user);
        self.sessions.write(&session)?;
        Ok(session)
    }

    /// Clear the stored session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the session cannot be removed.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_viewer_email_gets_viewer_role() {
        let user = check_credentials("viewer@company.com", &secret("1234")).unwrap();
        assert_eq!(user.role, Role::Viewer);
        assert_eq!(user.name, DEMO_USER_NAME);
    }

    #[test]
    fn test_viewer_match_is_after_normalization() {
        let user = check_credentials("  Viewer@Company.com ", &secret("1234")).unwrap();
        assert_eq!(user.role, Role::Viewer);
        assert_eq!(user.email.as_str(), "viewer@company.com");
    }

    #[test]
    fn test_other_emails_get_admin_role() {
        let user = check_credentials("a@b.com", &secret("abcd")).unwrap();
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_missing_at_is_rejected() {
        assert!(matches!(
            check_credentials("bad", &secret("1234")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_short_password_is_rejected() {
        assert!(matches!(
            check_credentials("a@b.com", &secret("12")),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_persists_and_logout_clears() {
        let sessions = SessionStore::new(Storage::in_memory());
        let auth = AuthService::new(&sessions, Latency::Instant);

        let session = auth.login("a@b.com", &secret("1234")).await.unwrap();
        assert!(session.is_authenticated);
        assert_eq!(auth.current(), session);

        auth.logout().unwrap();
        assert_eq!(auth.current(), Session::signed_out());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let sessions = SessionStore::new(Storage::in_memory());
        let auth = AuthService::new(&sessions, Latency::Instant);

        let before = auth.login("viewer@company.com", &secret("1234")).await.unwrap();
        let err = auth.login("nope", &secret("1234")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(auth.current(), before);
    }
}
