use crate::client::ServiceClient;
use crate::error::ServiceError;
use crate::settings::ServiceSettings;
use crate::transport::Transport;

use std::fmt;

use url::Url;

/// Builder for creating validated [`ServiceClient`] instances.
///
/// Every field is optional here so that a missing one is reported as
/// [`ServiceError::InvalidArgument`] by [`build`](Self::build) rather than
/// being impossible to express.
pub struct ServiceClientBuilder<T: Transport> {
    username: Option<String>,
    password: Option<String>,
    transport: Option<T>,
    settings: Option<ServiceSettings>,
    service_url: Option<String>,
}

impl<T: Transport + fmt::Debug> fmt::Debug for ServiceClientBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("transport", &self.transport)
            .field("settings", &self.settings)
            .field("service_url", &self.service_url)
            .finish()
    }
}

impl<T: Transport> Default for ServiceClientBuilder<T> {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            transport: None,
            settings: None,
            service_url: None,
        }
    }
}

impl<T: Transport> ServiceClientBuilder<T> {
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_settings(mut self, settings: ServiceSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = Some(service_url.into());
        self
    }

    /// Build the client with validation.
    #[track_caller]
    pub fn build(self) -> Result<ServiceClient<T>, ServiceError> {
        let username = self
            .username
            .ok_or_else(|| ServiceError::invalid_argument("username"))?;

        let password = self
            .password
            .ok_or_else(|| ServiceError::invalid_argument("password"))?;

        let transport = self
            .transport
            .ok_or_else(|| ServiceError::invalid_argument("transport"))?;

        let service_url = self
            .service_url
            .as_deref()
            .map(Url::parse)
            .transpose()?;

        let client = ServiceClient::new(&username, &password, transport, self.settings)?;

        Ok(match service_url {
            Some(url) => client.with_service_url(url),
            None => client,
        })
    }
}
