//! Typed request and response shapes for the Zoom HTTP API.
//!
//! These are declarative serde models only; transport, pagination cursoring,
//! and retry policy belong to the embedding application's HTTP layer.

pub mod common;
pub mod meetings;
pub mod webinars;
