//! The send/receive boundary the executor dispatches through.
//!
//! A transport owns a set of default headers. The client writes them once
//! at construction; every request sent afterwards inherits them unless the
//! request carries its own header of the same name.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use crate::error::ServiceError;

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;

/// An outbound request, opaque to the executor apart from its URL.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub method: Method,
    /// Absolute, or relative to the client's service URL.
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ServiceRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set `content-type`.
    ///
    /// # Errors
    /// Returns [`ServiceError::Encoding`] if `value` cannot be serialized.
    #[track_caller]
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ServiceError> {
        let body = serde_json::to_vec(value).map_err(ServiceError::encoding)?;
        self.headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(body);
        Ok(self)
    }
}

/// An inbound response; consumed by classification and then dropped.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: StatusCode,
    /// Reason phrase, when the transport has one.
    pub reason: Option<String>,
    pub body: Option<String>,
}

impl ServiceResponse {
    pub fn new(status: StatusCode, body: Option<String>) -> Self {
        Self {
            status,
            reason: status.canonical_reason().map(String::from),
            body,
        }
    }

    /// Reason phrase, falling back to the canonical one for the status.
    pub fn reason_phrase(&self) -> &str {
        self.reason
            .as_deref()
            .or_else(|| self.status.canonical_reason())
            .unwrap_or_default()
    }
}

/// Pluggable send capability.
pub trait Transport: Send + Sync {
    fn default_headers(&self) -> &HeaderMap;

    fn default_headers_mut(&mut self) -> &mut HeaderMap;

    /// Send one request and read its body.
    fn send(
        &self,
        request: ServiceRequest,
    ) -> impl Future<Output = Result<ServiceResponse, ServiceError>> + Send;
}

/// Defaults first, then the request's own headers replacing same-named ones.
pub fn merge_headers(defaults: &HeaderMap, overrides: HeaderMap) -> HeaderMap {
    let mut merged = defaults.clone();
    merged.extend(overrides);
    merged
}
