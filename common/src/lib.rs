//! Shared value types for the service request core.
//!
//! This crate holds the small, dependency-light pieces that both the
//! request executor and its callers need to agree on:
//!
//! - **ErrorLocation**: where an error was raised (`#[track_caller]`)
//! - **HttpStatusCode**: numeric status kept alongside remote failures
//! - **RedactedApiKey**: the `identity:secret` pair that never prints itself

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
