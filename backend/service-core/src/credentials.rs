//! Username/password credentials and the Basic token derived from them.

use crate::error::ServiceError;

use common::RedactedApiKey;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Authorization scheme for the derived token.
pub const BASIC_SCHEME: &str = "Basic";

/// Validated service credentials.
///
/// Immutable once constructed; the secret is only reachable through the
/// redacted api key.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: RedactedApiKey,
}

impl Credentials {
    /// Validate and join the credential pair.
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidArgument`] naming `username` or
    /// `password` when either is empty or whitespace-only.
    #[track_caller]
    pub fn new(username: &str, password: &str) -> Result<Self, ServiceError> {
        if username.trim().is_empty() {
            return Err(ServiceError::invalid_argument("username"));
        }

        if password.trim().is_empty() {
            return Err(ServiceError::invalid_argument("password"));
        }

        Ok(Self {
            api_key: RedactedApiKey::from_parts(username, password),
        })
    }

    pub fn username(&self) -> &str {
        self.api_key.identity()
    }

    /// The `username:password` api key.
    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    /// Standard Base64 of the UTF-8 bytes of the api key.
    pub fn basic_token(&self) -> String {
        STANDARD.encode(self.api_key.as_bytes())
    }

    /// Full `Authorization` header value, `Basic <token>`.
    pub fn authorization_value(&self) -> String {
        format!("{BASIC_SCHEME} {}", self.basic_token())
    }
}
