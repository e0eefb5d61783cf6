//! `IdentityProvider` backed by the hosted identity REST API.
//!
//! Hosted SDKs push session changes to the app; over plain REST the
//! transitions all originate from this process, so the provider emulates
//! the push stream locally: it tracks the current session under a mutex and
//! broadcasts every transition to all live subscribers. Sessions are not
//! persisted across processes.

use super::ApiClient;
use super::models::{
    SessionResponse, SignInRequest, SignUpRequest, SocialSignInRequest, VerificationEmailRequest,
};
use gatehouse_core::provider::{IdentityProvider, ProviderError, SessionChanges};
use gatehouse_core::{Identity, SocialProvider};
use std::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedSender};

struct Session {
    identity: Identity,
    token: String,
}

#[derive(Default)]
struct Shared {
    session: Option<Session>,
    subscribers: Vec<UnboundedSender<Option<Identity>>>,
}

/// REST-backed identity provider.
pub struct RestProvider {
    api: ApiClient,
    api_key: Option<String>,
    shared: Mutex<Shared>,
}

impl RestProvider {
    pub fn new(api: ApiClient, api_key: Option<String>) -> Self {
        Self {
            api,
            api_key,
            shared: Mutex::new(Shared::default()),
        }
    }

    /// Bearer token for the next call: the session token when signed in,
    /// otherwise the project API key.
    fn token(&self) -> Option<String> {
        let shared = self.shared.lock().expect("provider state poisoned");
        shared
            .session
            .as_ref()
            .map(|s| s.token.clone())
            .or_else(|| self.api_key.clone())
    }

    fn establish(&self, response: SessionResponse) -> Identity {
        let identity = Identity {
            user_id: response.user_id,
            email: response.email,
            email_verified: response.email_verified,
        };
        let mut shared = self.shared.lock().expect("provider state poisoned");
        shared.session = Some(Session {
            identity: identity.clone(),
            token: response.token,
        });
        Self::broadcast(&mut shared, Some(identity.clone()));
        identity
    }

    fn clear(&self) {
        let mut shared = self.shared.lock().expect("provider state poisoned");
        shared.session = None;
        Self::broadcast(&mut shared, None);
    }

    fn broadcast(shared: &mut Shared, identity: Option<Identity>) {
        shared
            .subscribers
            .retain(|tx| tx.send(identity.clone()).is_ok());
    }
}

impl IdentityProvider for RestProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let request = SignInRequest { email, password };
        let response: SessionResponse = self
            .api
            .post("/v1/session", &request, self.api_key.as_deref())
            .await?;
        log::debug!("signed in as {}", response.user_id);
        Ok(self.establish(response))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let request = SignUpRequest { email, password };
        let response: SessionResponse = self
            .api
            .post("/v1/accounts", &request, self.api_key.as_deref())
            .await?;
        log::debug!("created account {}", response.user_id);
        Ok(self.establish(response))
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let token = self.token();
        self.api.delete("/v1/session", token.as_deref()).await?;
        self.clear();
        Ok(())
    }

    async fn send_verification_email(&self, identity: &Identity) -> Result<(), ProviderError> {
        let request = VerificationEmailRequest {
            user_id: &identity.user_id,
        };
        self.api
            .post_empty("/v1/verification-emails", &request, self.token().as_deref())
            .await
    }

    async fn social_sign_in(&self, social: SocialProvider) -> Result<Identity, ProviderError> {
        // The interactive consent happens on the provider's hosted surface;
        // this call resolves once the provider reports the outcome.
        let request = SocialSignInRequest {
            provider: social.key(),
        };
        let response: SessionResponse = self
            .api
            .post("/v1/social-sessions", &request, self.api_key.as_deref())
            .await?;
        Ok(self.establish(response))
    }

    fn session_changes(&self) -> SessionChanges {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut shared = self.shared.lock().expect("provider state poisoned");
        // Current state first, so the subscriber's resolution window closes
        // even when nobody is signed in.
        tx.send(shared.session.as_ref().map(|s| s.identity.clone()))
            .ok();
        shared.subscribers.push(tx);
        rx
    }
}
