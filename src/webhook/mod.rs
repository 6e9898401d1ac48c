//! Webhook signature verification and the endpoint-ownership handshake.
//!
//! The platform signs every callback with HMAC-SHA256 over
//! `v0:<timestamp>:<body>` using the account's webhook secret, and delivers
//! the result as `v0=<hex digest>` in the signature header. Before sending
//! live events it performs a one-time challenge: an `endpoint.url_validation`
//! event whose `plainToken` must be echoed back alongside its HMAC digest.

pub mod events;

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha2::Sha256;

use crate::config::ZoomConfig;
use crate::error::{webhook_error, Error, WebhookErrorKind};
use events::WebhookEvent;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request timestamp the platform signed over.
pub const REQUEST_TIMESTAMP_HEADER: &str = "x-zm-request-timestamp";
/// Header carrying the `v0=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "x-zm-signature";

const SIGNATURE_PREFIX: &str = "v0=";

/// Response body for the endpoint validation handshake, echoed verbatim back
/// to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointValidationResponse {
    pub plain_token: String,
    pub encrypted_token: String,
}

/// Verifies inbound webhook requests against the configured shared secret.
///
/// Both operations are pure functions of their inputs; a single verifier can
/// be shared freely across threads.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Option<SecretString>,
}

impl WebhookVerifier {
    /// Create a verifier from a webhook secret token.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(SecretString::new(secret.into())),
        }
    }

    /// Create a verifier from a client configuration.
    ///
    /// If the configuration has no webhook secret, the verifier is still
    /// constructed but every operation fails with
    /// [`WebhookErrorKind::MissingSecret`], so a misconfigured receiver is
    /// reported as such instead of rejecting every request.
    pub fn from_config(config: &ZoomConfig) -> Self {
        Self {
            secret: config.webhook_secret_token().cloned(),
        }
    }

    fn secret(&self) -> Result<&SecretString, Error> {
        self.secret.as_ref().ok_or_else(|| {
            webhook_error(
                WebhookErrorKind::MissingSecret,
                "no webhook secret token configured",
            )
        })
    }

    fn mac(&self) -> Result<HmacSha256, Error> {
        HmacSha256::new_from_slice(self.secret()?.expose_secret().as_bytes()).map_err(|_| {
            webhook_error(WebhookErrorKind::MissingSecret, "invalid HMAC key")
        })
    }

    /// Verify the signature of an inbound webhook request.
    ///
    /// Recomputes `v0=<hex(HMAC_SHA256(secret, "v0:<timestamp>:<body>"))>`
    /// and compares it against the signature header in constant time.
    ///
    /// Returns `Ok(false)` when the signature header is absent, malformed, or
    /// does not match; `Err` only when no secret is configured.
    pub fn verify_signature(
        &self,
        headers: &HashMap<String, String>,
        event: &WebhookEvent,
    ) -> Result<bool, Error> {
        let mut mac = self.mac()?;

        let body = serde_json::to_string(event).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: crate::error::ErrorKind::Webhook(WebhookErrorKind::InvalidPayload),
        })?;

        // An absent timestamp header signs over the literal "undefined",
        // matching the platform's own signer.
        let timestamp = header(headers, REQUEST_TIMESTAMP_HEADER).unwrap_or("undefined");
        let message = format!("v0:{}:{}", timestamp, body);
        mac.update(message.as_bytes());

        let signature = match header(headers, SIGNATURE_HEADER) {
            Some(signature) => signature,
            None => {
                tracing::debug!(event = event.event_name(), "missing signature header");
                return Ok(false);
            }
        };

        // Parse the hex-encoded signature
        let expected_sig = match signature
            .strip_prefix(SIGNATURE_PREFIX)
            .and_then(|digest| hex::decode(digest).ok())
        {
            Some(bytes) => bytes,
            None => {
                tracing::debug!(event = event.event_name(), "malformed signature header");
                return Ok(false);
            }
        };

        // Verify the signature in constant time
        let is_valid = mac.verify_slice(&expected_sig).is_ok();
        if !is_valid {
            tracing::debug!(event = event.event_name(), "signature verification failed");
        }
        Ok(is_valid)
    }

    /// Answer the platform's endpoint-ownership challenge.
    ///
    /// Returns `Ok(None)` for every event other than `endpoint.url_validation`
    /// (not applicable, not an error). For the validation event, returns the
    /// challenge token alongside its HMAC-SHA256 hex digest, to be returned
    /// verbatim as the HTTP response body.
    pub fn endpoint_validation_response(
        &self,
        event: &WebhookEvent,
    ) -> Result<Option<EndpointValidationResponse>, Error> {
        let payload = match event {
            WebhookEvent::EndpointUrlValidation { payload } => payload,
            _ => return Ok(None),
        };

        let mut mac = self.mac()?;
        mac.update(payload.plain_token.as_bytes());
        let digest = hex::encode(mac.finalize().into_bytes());

        Ok(Some(EndpointValidationResponse {
            plain_token: payload.plain_token.clone(),
            encrypted_token: digest,
        }))
    }
}

/// Case-insensitive header lookup.
fn header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers.get(name).map(String::as_str).or_else(|| {
        headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    })
}
