//! Shared request-execution core for service-specific clients.
//!
//! A service client wraps a [`ServiceClient`], builds [`ServiceRequest`]s for
//! its endpoints and calls [`ServiceClient::execute`] (raw text) or
//! [`ServiceClient::execute_json`] (decoded value). Authentication headers,
//! status branching and error-envelope parsing all happen here.

pub mod client;
pub mod config;
pub mod credentials;
pub mod envelope;
pub mod error;
pub mod settings;
pub mod transport;

pub use client::{DecodeBody, Json, PlainText, ServiceClient, ServiceClientBuilder};
pub use config::ServiceConfig;
pub use credentials::Credentials;
pub use error::{ConfigError, ServiceError};
pub use settings::{LEARNING_OPT_OUT_HEADER, ServiceSettings};
pub use transport::{ReqwestTransport, ServiceRequest, ServiceResponse, Transport};
