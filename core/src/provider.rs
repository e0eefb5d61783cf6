//! The seam between this core and the hosted identity provider.
//!
//! The provider owns credential storage, password hashing, token issuance,
//! verification-email dispatch, and the social consent flow. This crate
//! only calls it, through [`IdentityProvider`], and mirrors whatever it
//! reports through its push-based session stream.

use crate::models::{Identity, SocialProvider};
use thiserror::Error;
use tokio::sync::mpsc;

/// Failure shape every provider operation reports.
///
/// `code` is a provider-defined string (`invalid-credential`,
/// `auth/too-many-requests`, ...); it is translated by
/// [`crate::ProviderCode`] before anything reaches the user.
/// `message` is provider internals and is logged, never displayed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    /// Provider-defined error code.
    pub code: String,
    /// Provider-supplied diagnostic text.
    pub message: String,
}

impl ProviderError {
    /// Build an error from a code/message pair.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Session-change subscription handle.
///
/// Each notification carries the provider's full new view of the session:
/// `Some(identity)` after a sign-in, `None` after a sign-out. Notifications
/// arrive in the order the provider emits them and each one fully replaces
/// prior state. Dropping the receiver unsubscribes.
pub type SessionChanges = mpsc::UnboundedReceiver<Option<Identity>>;

/// Abstract capability surface of the hosted identity provider.
///
/// All operations are asynchronous and suspend the caller until the
/// provider responds; there is no local retry, timeout, or cancellation —
/// those are the provider's responsibility.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Verify credentials and establish a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    /// Create a new account. The returned identity is unverified.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;

    /// Tear down the current session, if any.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Ask the provider to email a verification link to `identity`.
    async fn send_verification_email(&self, identity: &Identity) -> Result<(), ProviderError>;

    /// Run the provider-hosted interactive consent flow.
    async fn social_sign_in(&self, social: SocialProvider) -> Result<Identity, ProviderError>;

    /// Subscribe to session-change notifications.
    ///
    /// Implementations must deliver the current session state promptly after
    /// subscription so the initial resolution window can close, then push
    /// every subsequent change.
    fn session_changes(&self) -> SessionChanges;
}
