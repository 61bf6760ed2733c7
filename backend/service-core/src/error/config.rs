use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Missing Variable Error: {name} {location}")]
    MissingVariable {
        location: ErrorLocation,
        name: &'static str,
    },

    #[error("Config Invalid Value Error: {name}: {reason} {location}")]
    InvalidValue {
        location: ErrorLocation,
        name: &'static str,
        reason: String,
    },

    #[error("Config Parse Error: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        reason: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(error: toml::de::Error) -> Self {
        ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            reason: error.to_string(),
        }
    }
}
