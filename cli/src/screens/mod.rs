//! Interactive screens: thin presentation over the core.
//!
//! Each screen owns its own pending indicator for the provider call it
//! issues — engaged right before the call, cleared on every exit path —
//! and reports outcomes through the [`Notifier`] seam.

use gatehouse_core::{ActionKind, AuthError, NoticeKind, Notifier};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub mod home;
pub mod login;
pub mod signup;

/// Navigation the user asked for, beyond what the router gate decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Stay; the gate re-evaluates on the next loop turn.
    Stay,
    /// Push the signup screen.
    Signup,
    /// Pop back to the login screen.
    BackToLogin,
    /// Exit the program.
    Quit,
}

/// Run a provider call behind a spinner.
///
/// The spinner is the per-invocation pending flag: nothing else can be
/// submitted from this screen while it spins, and it is cleared whether the
/// call succeeds or fails.
pub(crate) async fn pending<F: Future>(label: &str, call: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let outcome = call.await;
    spinner.finish_and_clear();
    outcome
}

/// Render an auth failure the way the original toasts do: validation
/// failures with their fixed pairs, the verification-pending outcome as
/// info, provider failures with the translated message.
pub(crate) fn report(notifier: &dyn Notifier, action: ActionKind, err: &AuthError) {
    match err {
        AuthError::Validation(failure) => {
            notifier.notify(NoticeKind::Error, failure.title(), failure.message());
        }
        AuthError::VerificationPending => {
            notifier.notify(
                NoticeKind::Info,
                "Email Verification",
                "Please verify your email before logging in.",
            );
        }
        AuthError::Provider { message, .. } => {
            notifier.notify(NoticeKind::Error, action.failure_title(), message);
        }
    }
}
