//! Client configuration.

/// Default request timeout, matching what the product has always shipped.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::ApiClient`], provided by the embedding
/// application.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the Mad Wallet API, e.g. `http://localhost:3000`.
    /// Trailing slashes are trimmed.
    pub base_url: String,
    /// Bearer token from a previous session, if one was persisted.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
