//! Error taxonomy and provider error-code translation.
//!
//! Provider failures arrive as free-form `(code, message)` pairs. The core
//! never shows a raw code to the user: codes are parsed into a closed
//! [`ProviderCode`] enum and mapped through a total message table, with a
//! per-action generic fallback for anything unrecognized.

use crate::provider::ProviderError;
use crate::validate::ValidationFailure;
use thiserror::Error;

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Provider error codes this core knows how to explain.
///
/// Parsing is total: unknown or future codes become [`ProviderCode::Unknown`]
/// rather than an error, so an unrecognized provider response can never
/// crash the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCode {
    /// Wrong email/password combination.
    InvalidCredential,
    /// Account exists but has been disabled by the provider.
    UserDisabled,
    /// Provider-side throttling kicked in.
    TooManyRequests,
    /// Signup attempted with an email that already has an account.
    EmailAlreadyInUse,
    /// Provider rejected the email address outright.
    InvalidEmail,
    /// Provider rejected the password as too weak.
    WeakPassword,
    /// Anything else, including codes added by the provider after this
    /// crate shipped.
    Unknown,
}

impl ProviderCode {
    /// Parse a provider code string.
    ///
    /// Accepts both bare codes (`invalid-credential`) and namespaced ones
    /// (`auth/invalid-credential`), as emitted by hosted identity SDKs.
    pub fn parse(code: &str) -> Self {
        let short = code.rsplit('/').next().unwrap_or(code);
        match short {
            "invalid-credential" => Self::InvalidCredential,
            "user-disabled" => Self::UserDisabled,
            "too-many-requests" => Self::TooManyRequests,
            "email-already-in-use" => Self::EmailAlreadyInUse,
            "invalid-email" => Self::InvalidEmail,
            "weak-password" => Self::WeakPassword,
            _ => Self::Unknown,
        }
    }

    /// User-facing message for this code.
    ///
    /// Mapped codes have one fixed message regardless of which action
    /// failed; [`ProviderCode::Unknown`] degrades to the action's generic
    /// fallback.
    pub fn user_message(self, action: ActionKind) -> &'static str {
        match self {
            Self::InvalidCredential => "Invalid email or password.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyRequests => "Too many attempts. Try again later.",
            Self::EmailAlreadyInUse => "This email is already in use.",
            Self::InvalidEmail => "The email address is invalid.",
            Self::WeakPassword => "The password is too weak.",
            Self::Unknown => action.fallback_message(),
        }
    }
}

/// Which auth action a provider error came from; selects the generic
/// fallback message and the notice title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Email/password sign-in.
    Login,
    /// Account creation.
    Signup,
    /// Hosted social consent flow.
    SocialLogin,
    /// Sign-out.
    Logout,
}

impl ActionKind {
    /// Generic message shown when the provider code is unmapped.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Login failed. Please try again.",
            Self::Signup => "Signup failed. Please try again.",
            Self::SocialLogin => "Social sign-in failed. Please try again.",
            Self::Logout => "Logout failed. Please try again.",
        }
    }

    /// Fixed notice title for failures of this action.
    pub fn failure_title(self) -> &'static str {
        match self {
            Self::Login => "Login Failed",
            Self::Signup => "Signup Failed",
            Self::SocialLogin => "Social Login Error",
            Self::Logout => "Logout Failed",
        }
    }
}

/// Everything an auth action can report to its caller.
///
/// Nothing here is fatal to the process: every variant returns control to
/// the initiating screen with its pending flag cleared.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Input rejected locally, before any network call. The user corrects
    /// the form and retries; no state changed.
    #[error("{}", .0.message())]
    Validation(#[from] ValidationFailure),

    /// Provider call failed. `message` is already translated for display;
    /// the raw provider string never reaches the UI for unknown codes.
    #[error("{message}")]
    Provider {
        /// Parsed provider code, [`ProviderCode::Unknown`] if unmapped.
        code: ProviderCode,
        /// Translated user-facing message.
        message: String,
    },

    /// Sign-in succeeded at the provider but the email is unverified.
    ///
    /// This is an application-level rejection of a protocol-level success:
    /// the session was already torn down by a forced sign-out and the
    /// cached identity stays `None`. Render as an informational notice,
    /// not an error.
    #[error("Please verify your email before logging in.")]
    VerificationPending,
}

impl AuthError {
    /// Translate a provider failure for the given action.
    pub fn provider(action: ActionKind, err: &ProviderError) -> Self {
        let code = ProviderCode::parse(&err.code);
        log::debug!(
            "provider error during {action:?}: code={} mapped={code:?}",
            err.code
        );
        Self::Provider {
            code,
            message: code.user_message(action).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_bare_and_namespaced_codes() {
        assert_eq!(
            ProviderCode::parse("invalid-credential"),
            ProviderCode::InvalidCredential
        );
        assert_eq!(
            ProviderCode::parse("auth/invalid-credential"),
            ProviderCode::InvalidCredential
        );
        assert_eq!(ProviderCode::parse("auth/weak-password"), ProviderCode::WeakPassword);
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(
            ProviderCode::parse("auth/network-request-failed"),
            ProviderCode::Unknown
        );
        assert_eq!(ProviderCode::parse(""), ProviderCode::Unknown);
        assert_eq!(ProviderCode::parse("garbage///"), ProviderCode::Unknown);
    }

    #[test]
    fn mapped_codes_have_fixed_messages() {
        assert_eq!(
            ProviderCode::InvalidCredential.user_message(ActionKind::Login),
            "Invalid email or password."
        );
        // Same message regardless of action.
        assert_eq!(
            ProviderCode::InvalidCredential.user_message(ActionKind::Signup),
            "Invalid email or password."
        );
        assert_eq!(
            ProviderCode::EmailAlreadyInUse.user_message(ActionKind::Signup),
            "This email is already in use."
        );
        assert_eq!(
            ProviderCode::TooManyRequests.user_message(ActionKind::Login),
            "Too many attempts. Try again later."
        );
    }

    #[test]
    fn unknown_codes_fall_back_per_action() {
        assert_eq!(
            ProviderCode::Unknown.user_message(ActionKind::Login),
            "Login failed. Please try again."
        );
        assert_eq!(
            ProviderCode::Unknown.user_message(ActionKind::Signup),
            "Signup failed. Please try again."
        );
    }

    #[test]
    fn translated_error_never_carries_raw_code_text() {
        let raw = ProviderError {
            code: "auth/network-request-failed".into(),
            message: "TLS handshake with 10.0.0.7 failed".into(),
        };
        let err = AuthError::provider(ActionKind::Login, &raw);
        let shown = err.to_string();
        assert_eq!(shown, "Login failed. Please try again.");
        assert!(!shown.contains("network-request-failed"));
        assert!(!shown.contains("10.0.0.7"));
    }
}
