//! The `identity:secret` api key, kept out of logs and debug output.

use crate::RedactError;

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Separator between identity and secret in the api key.
pub const API_KEY_SEPARATOR: char = ':';

/// An api key that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
    identity_len: usize,
}

impl RedactedApiKey {
    /// Join an identity and a secret into `identity:secret`.
    pub fn from_parts(identity: &str, secret: &str) -> Self {
        let mut inner = String::with_capacity(identity.len() + secret.len() + 1);
        inner.push_str(identity);
        inner.push(API_KEY_SEPARATOR);
        inner.push_str(secret);

        Self {
            inner,
            identity_len: identity.len(),
        }
    }

    /// The full `identity:secret` value.
    ///
    /// # Security Note
    /// Only call this when deriving the value actually sent to the service.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The identity half (safe to log).
    #[inline]
    pub fn identity(&self) -> &str {
        &self.inner[..self.identity_len]
    }

    /// The secret half.
    ///
    /// # Security Note
    /// Same rules as [`as_str`](Self::as_str).
    #[inline]
    pub fn secret(&self) -> &str {
        &self.inner[self.identity_len + API_KEY_SEPARATOR.len_utf8()..]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey({}:[REDACTED])", self.identity())
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::serialization_refused(
            "RedactedApiKey",
        )))
    }
}
