//! The request executor shared by every service-specific client.
//!
//! Construction validates credentials and writes two default headers onto
//! the transport: `Authorization: Basic <token>` and the learning opt-out
//! flag. Those headers are never touched again, so one client can serve
//! any number of concurrent calls.

pub mod builder;
pub mod decode;

pub use builder::ServiceClientBuilder;
pub use decode::{DecodeBody, Json, PlainText};

use crate::credentials::Credentials;
use crate::envelope::classify_error;
use crate::error::ServiceError;
use crate::settings::{LEARNING_OPT_OUT_HEADER, ServiceSettings};
use crate::transport::{ServiceRequest, Transport};

use common::{HttpStatusCode, RedactedApiKey};

use log::debug;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug)]
pub struct ServiceClient<T: Transport> {
    credentials: Credentials,
    transport: T,
    settings: ServiceSettings,
    service_url: Option<Url>,
}

impl<T: Transport> ServiceClient<T> {
    /// Validate credentials and configure `transport`'s default headers.
    ///
    /// `None` settings means [`ServiceSettings::default`] (opted out).
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidArgument`] for a blank username or
    /// password. No request is sent.
    #[track_caller]
    pub fn new(
        username: &str,
        password: &str,
        mut transport: T,
        settings: Option<ServiceSettings>,
    ) -> Result<Self, ServiceError> {
        let credentials = Credentials::new(username, password)?;
        let settings = settings.unwrap_or_default();

        let mut authorization = HeaderValue::from_str(&credentials.authorization_value())
            .map_err(|_| ServiceError::invalid_argument("password"))?;
        authorization.set_sensitive(true);
        let headers = transport.default_headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            HeaderName::from_static(LEARNING_OPT_OUT_HEADER),
            HeaderValue::from_static(settings.opt_out_header_value()),
        );

        Ok(Self {
            credentials,
            transport,
            settings,
            service_url: None,
        })
    }

    pub fn builder() -> ServiceClientBuilder<T> {
        ServiceClientBuilder::default()
    }

    /// Base URL that relative request URLs are resolved against.
    pub fn with_service_url(mut self, service_url: Url) -> Self {
        self.service_url = Some(service_url);
        self
    }

    /// The `username:password` api key.
    pub fn api_key(&self) -> &RedactedApiKey {
        self.credentials.api_key()
    }

    pub fn service_url(&self) -> Option<&Url> {
        self.service_url.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Send `request` and return the trimmed body of a 2xx response.
    ///
    /// # Errors
    /// - [`ServiceError::InvalidArgument`] if the request has no usable URL
    /// - [`ServiceError::RemoteService`] for any non-2xx status
    /// - [`ServiceError::Transport`] if the round trip did not complete
    pub async fn execute(&self, request: ServiceRequest) -> Result<String, ServiceError> {
        let request = self.resolve(request)?;
        debug!("Dispatching {} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        let text = response.body.as_deref().unwrap_or_default().trim().to_string();

        let status = HttpStatusCode::from(response.status.as_u16());
        if !status.is_success() {
            let message = classify_error(status.as_u16(), response.reason_phrase(), &text);
            debug!("Request failed with {status}: {message}");
            return Err(ServiceError::remote_service(status.as_u16(), message));
        }

        Ok(text)
    }

    /// Send `request` and decode the body with `D`.
    ///
    /// Failures from [`execute`](Self::execute) pass through unchanged; a
    /// decode failure is a [`ServiceError::Decoding`].
    pub async fn execute_as<D: DecodeBody>(
        &self,
        request: ServiceRequest,
    ) -> Result<D::Output, ServiceError> {
        let text = self.execute(request).await?;
        D::decode(text)
    }

    /// Send `request` and decode the JSON body into `R`.
    ///
    /// An empty body yields `R::default()`.
    pub async fn execute_json<R>(&self, request: ServiceRequest) -> Result<R, ServiceError>
    where
        R: DeserializeOwned + Default,
    {
        self.execute_as::<Json<R>>(request).await
    }

    fn resolve(&self, mut request: ServiceRequest) -> Result<ServiceRequest, ServiceError> {
        let raw = request.url.trim();
        if raw.is_empty() {
            return Err(ServiceError::invalid_argument("request"));
        }

        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.service_url {
                Some(base) => base.join(raw)?,
                None => return Err(ServiceError::invalid_argument("request")),
            },
            Err(e) => return Err(e.into()),
        };

        request.url = url.into();
        Ok(request)
    }
}
