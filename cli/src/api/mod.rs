//! HTTP client for the hosted identity API.
//!
//! [`ApiClient`] handles transport and error-body decoding; the
//! [`provider::RestProvider`] on top of it implements the core's
//! `IdentityProvider` seam.

use gatehouse_core::provider::ProviderError;
use serde::Serialize;
use serde::de::DeserializeOwned;

mod models;
pub mod provider;

pub use provider::RestProvider;

use models::ApiErrorBody;

/// Thin JSON wrapper over reqwest with bearer-token support.
///
/// Every failure is reported as the provider's `(code, message)` shape:
/// decoded from the response body when the API sent one, synthesized as
/// `network-request-failed` / `http-<status>` otherwise. Synthetic codes are
/// unmapped by design and surface as the generic fallback message.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST `body` and decode a JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ProviderError> {
        let response = self.send(self.http.post(self.url(path)), Some(body), token).await?;
        response
            .json()
            .await
            .map_err(|e| ProviderError::new("malformed-response", e.to_string()))
    }

    /// POST `body`, expecting no response payload.
    pub async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), ProviderError> {
        self.send(self.http.post(self.url(path)), Some(body), token)
            .await?;
        Ok(())
    }

    /// DELETE `path`, expecting no response payload.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ProviderError> {
        self.send(self.http.delete(self.url(path)), None::<&()>, token)
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<B: Serialize>(
        &self,
        mut request: reqwest::RequestBuilder,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ProviderError> {
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::new("network-request-failed", e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Prefer the API's own error body; fall back to a synthetic code.
        let err = match response.json::<ApiErrorBody>().await {
            Ok(body) => ProviderError::new(body.code, body.message),
            Err(_) => ProviderError::new(format!("http-{}", status.as_u16()), status.to_string()),
        };
        log::debug!("identity api error: {err}");
        Err(err)
    }
}
