//! Client configuration and credentials.

use std::time::Duration;

use secrecy::SecretString;

/// Default lifetime for generated API access tokens.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600); // 1 hour

/// Credentials and settings for the Zoom API client.
///
/// Constructed once at startup and shared read-only for the lifetime of the
/// process. Secrets are wrapped in [`SecretString`] so they are redacted from
/// `Debug` output and zeroized on drop.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    api_key: String,
    api_secret: SecretString,
    token_expires_in: Option<Duration>,
    webhook_secret_token: Option<SecretString>,
}

impl ZoomConfig {
    /// Create a configuration from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::new(api_secret.into()),
            token_expires_in: None,
            webhook_secret_token: None,
        }
    }

    /// Set the lifetime of generated access tokens.
    ///
    /// Defaults to [`DEFAULT_TOKEN_TTL`] when unset.
    pub fn with_token_expiry(mut self, expires_in: Duration) -> Self {
        self.token_expires_in = Some(expires_in);
        self
    }

    /// Set the shared secret used to verify inbound webhook requests.
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret_token = Some(SecretString::new(secret.into()));
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the API secret.
    pub fn api_secret(&self) -> &SecretString {
        &self.api_secret
    }

    /// Get the configured access token lifetime, if any.
    pub fn token_expires_in(&self) -> Option<Duration> {
        self.token_expires_in
    }

    /// Get the webhook secret token, if one is configured.
    pub fn webhook_secret_token(&self) -> Option<&SecretString> {
        self.webhook_secret_token.as_ref()
    }
}
