//! JWT access tokens for authenticating API requests.
//!
//! The platform accepts an HS256 JWT signed with the account's API secret,
//! carrying the API key as issuer. Token refresh and caching are the caller's
//! concern; this module only mints tokens.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::{ZoomConfig, DEFAULT_TOKEN_TTL};
use crate::error::{token_error, Error, TokenErrorKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// API key.
    iss: String,
    /// Expiration, seconds since the Unix epoch.
    exp: usize,
}

/// Mints short-lived JWTs for API requests.
#[derive(Clone)]
pub struct AccessToken {
    api_key: String,
    api_secret: SecretString,
    ttl: Duration,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't show api_secret here
        f.debug_struct("AccessToken")
            .field("api_key", &self.api_key)
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl AccessToken {
    /// Create a token generator from a client configuration.
    pub fn from_config(config: &ZoomConfig) -> Self {
        Self {
            api_key: config.api_key().to_owned(),
            api_secret: config.api_secret().clone(),
            ttl: config.token_expires_in().unwrap_or(DEFAULT_TOKEN_TTL),
        }
    }

    /// Create a token generator directly from an API key and secret.
    pub fn with_key(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::new(api_secret.into()),
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sign and encode a JWT valid for the configured lifetime.
    pub fn to_jwt(&self) -> Result<String, Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| {
                token_error(TokenErrorKind::InvalidExpiry, "system clock before Unix epoch")
            })?;

        let claims = Claims {
            iss: self.api_key.clone(),
            exp: (now + self.ttl).as_secs() as usize,
        };

        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.api_secret.expose_secret().as_bytes()),
        )
        .map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: crate::error::ErrorKind::Token(TokenErrorKind::Encoding),
        })
    }
}
