//! HTTP client for the Mad Wallet API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use madwallet_core::events::{EventSink, StoreEvent};

use crate::config::ApiClientConfig;
use crate::error::ApiError;

/// Every successful response arrives wrapped in this envelope.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error body shape the backend uses for non-2xx answers.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the Mad Wallet API.
///
/// Holds the bearer token for the session in one shared slot: login stores
/// it, logout clears it, and a 401 from any authenticated endpoint clears it
/// and emits [`StoreEvent::SessionExpired`] exactly once per expiry.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    event_sink: Arc<dyn EventSink>,
    session_expired: AtomicBool,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, event_sink: Arc<dyn EventSink>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(config.token),
            event_sink,
            session_expired: AtomicBool::new(false),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when a bearer token is present.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn set_token(&self, token: String) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        // A fresh token starts a fresh session.
        self.session_expired.store(false, Ordering::Release);
    }

    pub(crate) fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = token.as_deref() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    fn expire_session(&self) {
        self.clear_token();
        if !self.session_expired.swap(true, Ordering::AcqRel) {
            warn!("[ApiClient] bearer token rejected, session expired");
            self.event_sink.emit(StoreEvent::SessionExpired);
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[ApiClient] {method} {url}");

        let mut request = self.client.request(method, &url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    /// Reads the response body, mapping 401 to session expiry and other
    /// non-2xx statuses to the backend's error message when it sent one.
    async fn check(&self, response: reqwest::Response, authenticated: bool) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED && authenticated {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.error.or(e.message))
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }

    fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str::<Envelope<T>>(body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Deserialization(format!("{e}: {body}")))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        let body = self.check(response, true).await?;
        Self::unwrap_envelope(&body)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        let body = self.check(response, true).await?;
        Self::unwrap_envelope(&body)
    }

    /// POST without the 401-to-session-expiry mapping, for the auth
    /// endpoints where a 401 means bad credentials, not an expired session.
    pub(crate) async fn post_public<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        let body = self.check(response, false).await?;
        Self::unwrap_envelope(&body)
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
    ) -> Result<T, ApiError> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        let body = self.check(response, true).await?;
        Self::unwrap_envelope(&body)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        self.check(response, true).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madwallet_core::events::{MockEventSink, NoOpEventSink};

    fn client_with(config: ApiClientConfig) -> ApiClient {
        ApiClient::new(config, Arc::new(NoOpEventSink)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slashes_trimmed() {
        let client = client_with(ApiClientConfig::new("http://localhost:3000//"));
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_token_slot_lifecycle() {
        let client = client_with(ApiClientConfig::new("http://localhost:3000"));
        assert!(!client.has_token());

        client.set_token("jwt".to_string());
        assert!(client.has_token());
        assert!(client.headers().contains_key(AUTHORIZATION));

        client.clear_token();
        assert!(!client.has_token());
        assert!(!client.headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_configured_token_is_used() {
        let client =
            client_with(ApiClientConfig::new("http://localhost:3000").with_token("persisted"));
        let headers = client.headers();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer persisted"
        );
    }

    #[test]
    fn test_session_expiry_emits_once() {
        let sink = MockEventSink::new();
        let client = ApiClient::new(
            ApiClientConfig::new("http://localhost:3000").with_token("jwt"),
            Arc::new(sink.clone()),
        )
        .unwrap();

        client.expire_session();
        client.expire_session();

        assert!(!client.has_token());
        assert_eq!(sink.len(), 1);
        assert!(matches!(sink.events()[0], StoreEvent::SessionExpired));

        // A new login re-arms the signal.
        client.set_token("jwt2".to_string());
        client.expire_session();
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_envelope_unwrapping() {
        let data: Vec<i64> = ApiClient::unwrap_envelope(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(data, vec![1, 2, 3]);

        let err = ApiClient::unwrap_envelope::<Vec<i64>>(r#"[1,2,3]"#).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
