//! End-to-end flows over an in-memory provider.
//!
//! The fake provider mirrors hosted-SDK behavior: it pushes the current
//! session to new subscribers, emits `Some(identity)` after successful
//! sign-in/sign-up and `None` after sign-out, and fails with scripted
//! `(code, message)` errors. All tests run on the current-thread runtime,
//! so a `yield_now` is enough to let the session subscriber drain its
//! queue deterministically.

use gatehouse_core::provider::{IdentityProvider, ProviderError, SessionChanges};
use gatehouse_core::{
    AuthActions, AuthError, Credentials, Identity, ProviderCode, Route, RouterGate,
    SessionContext, SocialProvider,
};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::mpsc::{self, UnboundedSender};

type Scripted<T> = Mutex<Option<Result<T, ProviderError>>>;

#[derive(Default)]
struct FakeProvider {
    sign_in_result: Scripted<Identity>,
    sign_up_result: Scripted<Identity>,
    sign_out_error: Mutex<Option<ProviderError>>,
    social_result: Scripted<Identity>,
    sign_out_calls: AtomicUsize,
    verification_emails: Mutex<Vec<String>>,
    current: Mutex<Option<Identity>>,
    subscribers: Mutex<Vec<UnboundedSender<Option<Identity>>>>,
}

impl FakeProvider {
    fn with_session(identity: Identity) -> Self {
        let fake = Self::default();
        *fake.current.lock().unwrap() = Some(identity);
        fake
    }

    fn script_sign_in(&self, result: Result<Identity, ProviderError>) {
        *self.sign_in_result.lock().unwrap() = Some(result);
    }

    fn script_sign_up(&self, result: Result<Identity, ProviderError>) {
        *self.sign_up_result.lock().unwrap() = Some(result);
    }

    fn script_social(&self, result: Result<Identity, ProviderError>) {
        *self.social_result.lock().unwrap() = Some(result);
    }

    fn fail_sign_out(&self, error: ProviderError) {
        *self.sign_out_error.lock().unwrap() = Some(error);
    }

    fn broadcast(&self, identity: Option<Identity>) {
        self.subscribers
            .lock()
            .unwrap()
            .retain(|tx| tx.send(identity.clone()).is_ok());
    }

    fn establish(&self, identity: Identity) {
        *self.current.lock().unwrap() = Some(identity.clone());
        self.broadcast(Some(identity));
    }
}

impl IdentityProvider for FakeProvider {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Identity, ProviderError> {
        let result = self
            .sign_in_result
            .lock()
            .unwrap()
            .take()
            .expect("sign_in not scripted");
        if let Ok(identity) = &result {
            self.establish(identity.clone());
        }
        result
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> Result<Identity, ProviderError> {
        let result = self
            .sign_up_result
            .lock()
            .unwrap()
            .take()
            .expect("sign_up not scripted");
        if let Ok(identity) = &result {
            self.establish(identity.clone());
        }
        result
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.sign_out_error.lock().unwrap().clone() {
            return Err(error);
        }
        *self.current.lock().unwrap() = None;
        self.broadcast(None);
        Ok(())
    }

    async fn send_verification_email(&self, identity: &Identity) -> Result<(), ProviderError> {
        self.verification_emails
            .lock()
            .unwrap()
            .push(identity.user_id.clone());
        Ok(())
    }

    async fn social_sign_in(&self, _social: SocialProvider) -> Result<Identity, ProviderError> {
        let result = self
            .social_result
            .lock()
            .unwrap()
            .take()
            .expect("social_sign_in not scripted");
        if let Ok(identity) = &result {
            self.establish(identity.clone());
        }
        result
    }

    fn session_changes(&self) -> SessionChanges {
        let (tx, rx) = mpsc::unbounded_channel();
        // Current state first, so the initial resolution window closes.
        tx.send(self.current.lock().unwrap().clone()).ok();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}

fn identity(user_id: &str, verified: bool) -> Identity {
    Identity {
        user_id: user_id.into(),
        email: format!("{user_id}@example.com"),
        email_verified: verified,
    }
}

async fn drain() {
    // Current-thread runtime: one yield lets the subscriber task run until
    // its queue is empty.
    tokio::task::yield_now().await;
    tokio::task::yield_now().await;
}

#[tokio::test]
async fn loading_clears_on_first_notification_even_when_signed_out() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());

    assert!(session.snapshot().loading);
    drain().await;

    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.identity, None);
}

#[tokio::test]
async fn unverified_login_forces_sign_out_and_leaves_identity_null() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_sign_in(Ok(identity("u1", false)));

    let result = actions
        .login(&Credentials::login("a@b.com", "abc123"))
        .await;

    assert_eq!(result, Err(AuthError::VerificationPending));
    assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 1);

    drain().await;
    let state = session.snapshot();
    assert!(!state.loading);
    assert_eq!(state.identity, None, "no unverified session may persist");
}

#[tokio::test]
async fn verified_login_reaches_home_exactly_once() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_sign_in(Ok(identity("u1", true)));

    actions
        .login(&Credentials::login("u1@example.com", "abc123"))
        .await
        .expect("login should succeed");
    drain().await;

    let state = session.snapshot();
    assert!(state.is_authenticated());

    let mut gate = RouterGate::new();
    assert_eq!(gate.evaluate(&state), Some(Route::Home));
    assert_eq!(gate.evaluate(&state), None, "repeated evaluation must not renavigate");
}

#[tokio::test]
async fn invalid_credential_maps_to_exact_message() {
    let provider = Arc::new(FakeProvider::default());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_sign_in(Err(ProviderError::new(
        "auth/invalid-credential",
        "INVALID_LOGIN_CREDENTIALS",
    )));

    let err = actions
        .login(&Credentials::login("a@b.com", "abc123"))
        .await
        .unwrap_err();

    match err {
        AuthError::Provider { code, message } => {
            assert_eq!(code, ProviderCode::InvalidCredential);
            assert_eq!(message, "Invalid email or password.");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn unmapped_code_falls_back_to_generic_message() {
    let provider = Arc::new(FakeProvider::default());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_sign_in(Err(ProviderError::new(
        "auth/network-request-failed",
        "socket closed",
    )));

    let err = actions
        .login(&Credentials::login("a@b.com", "abc123"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Login failed. Please try again.");
    assert!(!err.to_string().contains("network-request-failed"));
}

#[tokio::test]
async fn validation_failure_never_reaches_the_provider() {
    let provider = Arc::new(FakeProvider::default());
    let actions = AuthActions::new(Arc::clone(&provider));
    // Nothing scripted: a provider call would panic the test.

    let err = actions
        .login(&Credentials::login("a@b.com", "nodigits"))
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
}

#[tokio::test]
async fn signup_sends_one_verification_email_and_grants_no_access() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_sign_up(Ok(identity("u2", false)));

    actions
        .signup(&Credentials::signup("u2@example.com", "abc123", "abc123"))
        .await
        .expect("signup should succeed");
    drain().await;

    assert_eq!(
        provider.verification_emails.lock().unwrap().as_slice(),
        ["u2"]
    );

    let state = session.snapshot();
    assert!(!state.is_authenticated(), "new accounts stay unverified");
    let mut gate = RouterGate::new();
    assert_eq!(gate.evaluate(&state), Some(Route::Login));
}

#[tokio::test]
async fn social_login_is_trusted_without_a_verification_gate() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    provider.script_social(Ok(identity("u3", true)));

    actions
        .social_login(SocialProvider::Google)
        .await
        .expect("social login should succeed");
    assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 0);

    drain().await;
    assert!(session.snapshot().is_authenticated());
}

#[tokio::test]
async fn logout_success_clears_identity() {
    let provider = Arc::new(FakeProvider::with_session(identity("u1", true)));
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    drain().await;
    assert!(session.snapshot().is_authenticated());

    actions.logout().await.expect("logout should succeed");
    drain().await;

    let state = session.snapshot();
    assert_eq!(state.identity, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn logout_failure_leaves_identity_unchanged() {
    let provider = Arc::new(FakeProvider::with_session(identity("u1", true)));
    let session = SessionContext::start(provider.as_ref());
    let actions = AuthActions::new(Arc::clone(&provider));
    drain().await;

    provider.fail_sign_out(ProviderError::new("auth/network-request-failed", "offline"));
    let err = actions.logout().await.unwrap_err();
    assert_eq!(err.to_string(), "Logout failed. Please try again.");

    drain().await;
    let state = session.snapshot();
    assert_eq!(state.identity, Some(identity("u1", true)));
}

#[tokio::test]
async fn session_notifications_replace_state_wholesale_in_order() {
    let provider = Arc::new(FakeProvider::default());
    let session = SessionContext::start(provider.as_ref());
    let mut watch = session.watch();

    provider.broadcast(Some(identity("u1", false)));
    provider.broadcast(Some(identity("u1", true)));
    drain().await;

    let state = watch.borrow_and_update().clone();
    assert_eq!(state.identity, Some(identity("u1", true)));
    assert!(!state.loading);
}
