//! The single failure type surfaced by the request executor.
//!
//! - Every variant carries an `ErrorLocation` captured via `#[track_caller]`
//! - `RemoteService` keeps the numeric status next to the classified message
//! - Conversions from `reqwest`, `serde_json` and `url` errors are located too
//! - `serde_json` converts to `Decoding`; request-body failures use `encoding()`

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ServiceError {
    /// A required constructor or call argument was missing or blank.
    #[error("Invalid Argument Error: '{argument}' is required {location}")]
    InvalidArgument {
        argument: &'static str,
        location: ErrorLocation,
    },

    /// The service answered with a non-2xx status.
    #[error("Remote Service Error: {message} {location}")]
    RemoteService {
        message: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// A request body could not be serialized; nothing was sent.
    #[error("Encoding Error: {message} {location}")]
    Encoding {
        message: String,
        location: ErrorLocation,
    },

    /// A successful body could not be decoded into the requested type.
    #[error("Decoding Error: {message} {location}")]
    Decoding {
        message: String,
        location: ErrorLocation,
    },

    /// The transport failed before a complete response was read.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn invalid_argument(argument: &'static str) -> Self {
        ServiceError::InvalidArgument {
            argument,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_service(status_code: u16, message: impl Into<String>) -> Self {
        ServiceError::RemoteService {
            message: message.into(),
            status_code: HttpStatusCode(status_code),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Request-body serialization failure, kept apart from response decoding.
    #[track_caller]
    pub fn encoding(error: serde_json::Error) -> Self {
        ServiceError::Encoding {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The bare message, without kind prefix or location.
    ///
    /// For `RemoteService` this is exactly the classified string, e.g.
    /// `"404 Not Found"` or the envelope's `error` field.
    pub fn message(&self) -> String {
        match self {
            ServiceError::InvalidArgument { argument, .. } => argument.to_string(),
            ServiceError::RemoteService { message, .. }
            | ServiceError::Encoding { message, .. }
            | ServiceError::Decoding { message, .. }
            | ServiceError::Transport { message, .. }
            | ServiceError::UrlParse { message, .. } => message.clone(),
        }
    }

    /// HTTP status code if the failure came from a completed round trip.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::RemoteService { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ServiceError::InvalidArgument { .. })
    }

    pub fn is_remote_service(&self) -> bool {
        matches!(self, ServiceError::RemoteService { .. })
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, ServiceError::Encoding { .. })
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, ServiceError::Decoding { .. })
    }
}

impl From<url::ParseError> for ServiceError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ServiceError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ServiceError::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ServiceError::Decoding {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
