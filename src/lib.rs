//! # zoom-api
//!
//! Typed bindings for the Zoom HTTP API and a verifier for its inbound
//! webhooks:
//! - Request/response shapes for meetings, webinars, and registrants
//! - Webhook event payloads as a closed tagged union
//! - HMAC-SHA256 signature verification and the endpoint-validation handshake
//! - JWT access token generation for API requests
//!
//! HTTP transport, retries, and rate limiting are deliberately out of scope;
//! pair this crate with your own HTTP client. The webhook verifier takes the
//! headers and decoded body your HTTP layer already has:
//!
//! ```rust,ignore
//! use zoom_api::{WebhookVerifier, ZoomConfig};
//!
//! let config = ZoomConfig::new(api_key, api_secret).with_webhook_secret(secret);
//! let verifier = WebhookVerifier::from_config(&config);
//!
//! if verifier.verify_signature(&headers, &event)? {
//!     if let Some(response) = verifier.endpoint_validation_response(&event)? {
//!         // echo `response` back as the HTTP response body
//!     }
//! }
//! ```

pub mod access_token;
pub mod config;
pub mod error;
pub mod types;
pub mod webhook;

// Re-export commonly used types
pub use access_token::AccessToken;
pub use config::ZoomConfig;
pub use error::{Error, ErrorKind};
pub use webhook::events::WebhookEvent;
pub use webhook::{EndpointValidationResponse, WebhookVerifier};
