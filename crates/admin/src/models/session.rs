//! Session-related types for authentication state.
//!
//! The session is a single process-wide record derived from login/logout;
//! it is never checked against a credential backend.

use serde::{Deserialize, Serialize};

use backoffice_core::{Email, Role};

/// Signed-in user profile stored with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub name: String,
    /// Normalized (trimmed, lowercased) email.
    pub email: Email,
    /// Permission level.
    pub role: Role,
}

/// Persisted authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<SessionUser>,
}

impl Session {
    /// The signed-out session.
    #[must_use]
    pub const fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }

    /// A signed-in session for `user`.
    #[must_use]
    pub const fn signed_in(user: SessionUser) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Effective role; read-only when nobody is signed in.
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::Viewer, |u| u.role)
    }

    /// Whether the UI should offer create/update/delete actions.
    ///
    /// This is a presentation hint only; repositories do not enforce it.
    #[must_use]
    pub fn can_write(&self) -> bool {
        self.role() == Role::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_is_read_only() {
        let session = Session::signed_out();
        assert_eq!(session.role(), Role::Viewer);
        assert!(!session.can_write());
    }

    #[test]
    fn test_admin_can_write() {
        let session = Session::signed_in(SessionUser {
            name: "Demo User".to_string(),
            email: Email::parse("a@b.com").unwrap(),
            role: Role::Admin,
        });
        assert!(session.can_write());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Session::signed_out()).unwrap();
        assert_eq!(json, r#"{"isAuthenticated":false,"user":null}"#);
    }
}
