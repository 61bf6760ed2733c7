//! Credential and settings loading for service clients.
//!
//! # Sources
//! - Environment variables, after an optional `.env` load (cwd first, then
//!   the executable directory)
//! - A TOML document with the same keys in snake_case
//!
//! The password is held in a [`RedactedApiKey`] from the moment it is read,
//! so a `{:?}` of the config never prints it.

use crate::client::ServiceClient;
use crate::error::{ConfigError, ServiceError};
use crate::settings::ServiceSettings;
use crate::transport::Transport;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::Deserialize;
use url::Url;

pub const USERNAME_ENV: &str = "SERVICE_USERNAME";
pub const PASSWORD_ENV: &str = "SERVICE_PASSWORD";
pub const SERVICE_URL_ENV: &str = "SERVICE_URL";
pub const LEARNING_OPT_OUT_ENV: &str = "SERVICE_LEARNING_OPT_OUT";

const REDACTED: &str = "[REDACTED]";

/// Everything needed to build a [`ServiceClient`] apart from the transport.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    api_key: RedactedApiKey,
    pub service_url: Option<Url>,
    pub settings: ServiceSettings,
}

/// Values as read from a source, before validation.
#[derive(Deserialize)]
pub(crate) struct RawConfig {
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) service_url: Option<String>,
    #[serde(default)]
    pub(crate) learning_opt_out: Option<bool>,
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("service_url", &self.service_url)
            .field("learning_opt_out", &self.learning_opt_out)
            .finish()
    }
}

impl ServiceConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    #[track_caller]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let learning_opt_out = match lookup(LEARNING_OPT_OUT_ENV) {
            Some(value) => Some(parse_bool(LEARNING_OPT_OUT_ENV, &value)?),
            None => None,
        };

        Self::from_raw(RawConfig {
            username: lookup(USERNAME_ENV),
            password: lookup(PASSWORD_ENV),
            service_url: lookup(SERVICE_URL_ENV),
            learning_opt_out,
        })
    }

    /// Parse a TOML document:
    ///
    /// ```toml
    /// username = "apikey"
    /// password = "secret"
    /// service_url = "https://gateway.example.net/tone/api/"
    /// learning_opt_out = false
    /// ```
    #[track_caller]
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(document)?;
        Self::from_raw(raw)
    }

    pub fn username(&self) -> &str {
        self.api_key.identity()
    }

    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    /// Build a client over `transport` from this configuration.
    pub fn into_client<T: Transport>(self, transport: T) -> Result<ServiceClient<T>, ServiceError> {
        let client = ServiceClient::new(
            self.api_key.identity(),
            self.api_key.secret(),
            transport,
            Some(self.settings),
        )?;

        Ok(match self.service_url {
            Some(url) => client.with_service_url(url),
            None => client,
        })
    }

    #[track_caller]
    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        debug!("Validating service config: {raw:?}");

        let username = require(raw.username, USERNAME_ENV)?;
        let password = require(raw.password, PASSWORD_ENV)?;

        let service_url = match raw.service_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                Some(Url::parse(url).map_err(|e| ConfigError::InvalidValue {
                    location: ErrorLocation::from(Location::caller()),
                    name: SERVICE_URL_ENV,
                    reason: e.to_string(),
                })?)
            }
            _ => None,
        };

        let settings = raw
            .learning_opt_out
            .map(ServiceSettings::new)
            .unwrap_or_default();

        Ok(Self {
            api_key: RedactedApiKey::from_parts(&username, &password),
            service_url,
            settings,
        })
    }
}

/// Both sources report an absent or blank credential the same way.
#[track_caller]
fn require(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(missing(name)),
    }
}

#[track_caller]
fn missing(name: &'static str) -> ConfigError {
    ConfigError::MissingVariable {
        location: ErrorLocation::from(Location::caller()),
        name,
    }
}

#[track_caller]
fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            location: ErrorLocation::from(Location::caller()),
            name,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

/// Attempts to load `.env` from known locations.
///
/// Returns the path that was loaded, if any. Variables already set in the
/// process environment win over the file.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_dir = env::current_exe().ok()?.parent()?.to_path_buf();
    let env_path = exe_dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
