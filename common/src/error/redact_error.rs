use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Raised when a secret-bearing value is asked to serialize itself.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Refused: {type_name} holds a secret - use as_str() explicitly {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn serialization_refused(type_name: &'static str) -> Self {
        RedactError::SerializationRefused {
            type_name,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
