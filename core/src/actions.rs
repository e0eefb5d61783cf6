//! High-level authentication actions.
//!
//! Each action validates locally, invokes the provider, and translates
//! provider failures into user-facing [`AuthError`]s. Actions never write
//! to the session context directly — the provider's session stream is the
//! only writer path — and they share no mutable state with each other, so
//! any per-invocation pending flag belongs to the UI control that triggered
//! the action.

use crate::error::{ActionKind, AuthError, Result};
use crate::models::{Credentials, SocialProvider};
use crate::provider::IdentityProvider;
use crate::validate::{FormMode, validate};
use std::sync::Arc;

/// Wrappers over the provider operations, one instance per process.
#[derive(Debug, Clone)]
pub struct AuthActions<P> {
    provider: Arc<P>,
}

impl<P: IdentityProvider> AuthActions<P> {
    /// Wrap a provider handle.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Email/password sign-in.
    ///
    /// Validates first, then calls the provider. If the provider accepts the
    /// credentials but the email is unverified, the session is torn down
    /// immediately — no unverified session may persist — and
    /// [`AuthError::VerificationPending`] is returned; the cached identity
    /// never leaves `None` on that path. On full success the session context
    /// picks up the new identity from the provider's session stream, not
    /// from this call.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        validate(credentials, FormMode::Login)?;

        let identity = self
            .provider
            .sign_in(&credentials.email, &credentials.password)
            .await
            .map_err(|e| AuthError::provider(ActionKind::Login, &e))?;

        if !identity.email_verified {
            log::info!("sign-in rejected: email not verified for {}", identity.user_id);
            self.provider
                .sign_out()
                .await
                .map_err(|e| AuthError::provider(ActionKind::Login, &e))?;
            return Err(AuthError::VerificationPending);
        }

        Ok(())
    }

    /// Create an account and dispatch the verification email.
    ///
    /// The new account is intentionally left unverified and unusable for app
    /// access; the caller routes back to the login screen, not into the app.
    pub async fn signup(&self, credentials: &Credentials) -> Result<()> {
        validate(credentials, FormMode::Signup)?;

        let identity = self
            .provider
            .sign_up(&credentials.email, &credentials.password)
            .await
            .map_err(|e| AuthError::provider(ActionKind::Signup, &e))?;

        self.provider
            .send_verification_email(&identity)
            .await
            .map_err(|e| AuthError::provider(ActionKind::Signup, &e))?;

        Ok(())
    }

    /// Provider-hosted social consent flow.
    ///
    /// Any non-error resolution is treated as fully authenticated; there is
    /// no separate verification gate because the provider's social flow is
    /// trusted as already-verified.
    pub async fn social_login(&self, social: SocialProvider) -> Result<()> {
        self.provider
            .social_sign_in(social)
            .await
            .map_err(|e| AuthError::provider(ActionKind::SocialLogin, &e))?;
        Ok(())
    }

    /// Tear down the current session.
    ///
    /// On success the session stream delivers `None` and the cached identity
    /// clears; on failure the identity is left unchanged and the translated
    /// error is surfaced.
    pub async fn logout(&self) -> Result<()> {
        self.provider
            .sign_out()
            .await
            .map_err(|e| AuthError::provider(ActionKind::Logout, &e))
    }
}
