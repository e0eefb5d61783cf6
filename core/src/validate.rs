//! Form validation applied before any provider call.
//!
//! Rules run in a fixed order and the first failure wins; there is no
//! aggregation of multiple errors. Each failure carries a fixed
//! title/message pair for display — the pairs are part of the public
//! contract, not presentation detail.

use crate::models::Credentials;
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld: at least one '@', at least one '.' after it, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Password length bounds, inclusive.
pub const PASSWORD_MIN_LEN: usize = 6;
/// See [`PASSWORD_MIN_LEN`].
pub const PASSWORD_MAX_LEN: usize = 12;

/// Which form is being validated; signup adds the confirmation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Login form: email + password.
    Login,
    /// Signup form: email + password + confirmation.
    Signup,
}

/// Reason a submission was rejected before reaching the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Email field was empty.
    EmailRequired,
    /// Email did not look like `local@domain.tld`.
    EmailInvalid,
    /// Password field was empty.
    PasswordRequired,
    /// Password length outside `[6, 12]`.
    PasswordLength,
    /// Password contains no decimal digit.
    PasswordMissingDigit,
    /// Signup only: password and confirmation differ.
    PasswordMismatch,
}

impl ValidationFailure {
    /// Fixed notice title for this failure.
    pub fn title(self) -> &'static str {
        match self {
            Self::EmailRequired => "Email Required",
            Self::EmailInvalid => "Invalid Email",
            Self::PasswordRequired => "Password Required",
            Self::PasswordLength | Self::PasswordMissingDigit => "Invalid Password",
            Self::PasswordMismatch => "Password Mismatch",
        }
    }

    /// Fixed notice body for this failure.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailRequired => "Please enter your email address",
            Self::EmailInvalid => "Please enter a valid email format",
            Self::PasswordRequired => "Please enter your password",
            Self::PasswordLength => "Password must be between 6 and 12 characters",
            Self::PasswordMissingDigit => "Password must contain at least one number",
            Self::PasswordMismatch => "Passwords do not match",
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationFailure {}

/// Check raw form input against the syntactic rules for `mode`.
///
/// Pure; never touches the network. Rule order is fixed:
/// email present → email format → password present → password length
/// → password digit → (signup only) confirmation match.
///
/// # Arguments
/// * `credentials` - Raw form input.
/// * `mode` - Login or signup; signup also checks the confirmation field.
///
/// # Returns
/// `Ok(())` when the input may be sent to the provider, otherwise the first
/// failing rule.
pub fn validate(credentials: &Credentials, mode: FormMode) -> Result<(), ValidationFailure> {
    if credentials.email.is_empty() {
        return Err(ValidationFailure::EmailRequired);
    }
    if !EMAIL_RE.is_match(&credentials.email) {
        return Err(ValidationFailure::EmailInvalid);
    }
    if credentials.password.is_empty() {
        return Err(ValidationFailure::PasswordRequired);
    }
    let len = credentials.password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationFailure::PasswordLength);
    }
    if !credentials.password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationFailure::PasswordMissingDigit);
    }
    if mode == FormMode::Signup {
        let confirm = credentials.confirm_password.as_deref().unwrap_or("");
        if credentials.password != confirm {
            return Err(ValidationFailure::PasswordMismatch);
        }
    }
    Ok(())
}
