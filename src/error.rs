//! Error types for the `zoom-api` crate.
//!
//! A root Error struct holds an error kind plus an optional source for error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for zoom-api.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in zoom-api.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Webhook(WebhookErrorKind),
    Token(TokenErrorKind),
}

/// Errors from webhook verification and endpoint validation.
#[derive(Debug, PartialEq)]
pub enum WebhookErrorKind {
    /// No webhook secret token was configured. This is a configuration error,
    /// not a verification failure, so callers can tell a misconfigured
    /// receiver apart from a request with a bad signature.
    MissingSecret,
    /// The webhook event could not be serialized for signing.
    InvalidPayload,
}

/// Errors from access token generation.
#[derive(Debug, PartialEq)]
pub enum TokenErrorKind {
    Encoding,
    InvalidExpiry,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Webhook(kind) => write!(f, "Webhook error: {:?}", kind),
            ErrorKind::Token(kind) => write!(f, "Token error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Helper function to create webhook errors.
pub fn webhook_error(kind: WebhookErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Webhook(kind),
    }
}

/// Helper function to create token errors.
pub fn token_error(kind: TokenErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Token(kind),
    }
}
