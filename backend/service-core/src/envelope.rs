//! Classification of non-2xx response bodies.
//!
//! Services in this family answer failures with a JSON object carrying an
//! `error` field, sometimes preceded by a `help` link:
//!
//! ```text
//! {"help":"http://...","error":"too few words","code":400}
//! {"code":415,"error":"unsupported media type"}
//! ```
//!
//! Anything else (HTML gateway pages, plain text, empty bodies) is reported
//! as `"<status> <reason>"`.

use log::debug;
use serde::Deserialize;

/// The only part of an error envelope the executor reads.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    /// Parse `body` as an envelope if it is shaped like a JSON object.
    ///
    /// Returns `None` for non-objects, malformed JSON, a non-string `error`
    /// field, or an `error` that is missing or blank.
    pub fn parse(body: &str) -> Option<String> {
        let body = body.trim();
        if !(body.starts_with('{') && body.ends_with('}')) {
            return None;
        }

        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error: Some(error) }) if !error.trim().is_empty() => Some(error),
            Ok(_) => None,
            Err(e) => {
                debug!("Body looked like an error envelope but did not parse: {e}");
                None
            }
        }
    }
}

/// The message for a failed response.
///
/// The envelope's `error` field when there is one, otherwise
/// `"<status> <reason>"` (e.g. `"404 Not Found"`).
pub fn classify_error(status: u16, reason: &str, body: &str) -> String {
    ErrorEnvelope::parse(body).unwrap_or_else(|| status_message(status, reason))
}

fn status_message(status: u16, reason: &str) -> String {
    let reason = reason.trim();
    if reason.is_empty() {
        status.to_string()
    } else {
        format!("{status} {reason}")
    }
}
