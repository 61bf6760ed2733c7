//! HTTP status codes carried by remote service failures.

/// Numeric HTTP status of a completed round trip.
///
/// Stored directly so callers can branch on it without re-parsing the
/// classified error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 2xx responses, the only range the executor treats as success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
