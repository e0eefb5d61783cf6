//! Data model shared across the authentication core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw form input for a login or signup submission.
///
/// Created per submission and discarded after use; nothing in this crate
/// persists credentials. `Debug` redacts the password fields so the struct
/// can be logged without leaking secrets.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Email address as typed by the user.
    pub email: String,
    /// Password as typed by the user.
    pub password: String,
    /// Confirmation password; only consulted in signup mode.
    pub confirm_password: Option<String>,
}

impl Credentials {
    /// Credentials for a login form (no confirmation field).
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    /// Credentials for a signup form.
    pub fn signup(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: Some(confirm_password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field(
                "confirm_password",
                &self.confirm_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// The provider's last-known view of the signed-in user.
///
/// Owned by the provider; this crate only holds a read-only mirror inside
/// [`SessionState`], replaced wholesale on every session-change notification
/// and never patched field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned stable user id.
    pub user_id: String,
    /// Email address on record with the provider.
    pub email: String,
    /// Whether the provider has confirmed ownership of the email address.
    pub email_verified: bool,
}

/// Process-wide session snapshot published by [`SessionContext`].
///
/// `loading` is `true` only during the initial session resolution window;
/// the first provider notification clears it permanently for the lifetime
/// of the process.
///
/// [`SessionContext`]: crate::SessionContext
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Cached identity, `None` when signed out.
    pub identity: Option<Identity>,
    /// Whether the initial session resolution is still pending.
    pub loading: bool,
}

impl SessionState {
    /// State before the provider has reported anything.
    pub fn resolving() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    /// Whether the user may access the app: a session exists *and* the
    /// provider has verified the email address.
    pub fn is_authenticated(&self) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|identity| identity.email_verified)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Hosted consent flows the provider can run on our behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    /// Sign in with Google.
    Google,
}

impl SocialProvider {
    /// Stable key for the provider, as sent over the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}
