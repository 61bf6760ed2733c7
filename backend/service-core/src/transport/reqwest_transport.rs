use crate::error::ServiceError;
use crate::transport::{ServiceRequest, ServiceResponse, Transport, merge_headers};

use log::debug;
use reqwest::Client;
use reqwest::header::HeaderMap;

/// Production transport over a shared `reqwest::Client`.
///
/// No timeout is imposed beyond what the wrapped client was built with.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    #[track_caller]
    pub fn new() -> Result<Self, ServiceError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap a caller-configured client (proxies, TLS roots, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            default_headers: HeaderMap::new(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    fn default_headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.default_headers
    }

    async fn send(&self, request: ServiceRequest) -> Result<ServiceResponse, ServiceError> {
        let headers = merge_headers(&self.default_headers, request.headers);

        let mut builder = self
            .client
            .request(request.method, request.url.as_str())
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Received {} from {}", status.as_u16(), request.url);

        let body = response.text().await?;

        Ok(ServiceResponse::new(status, Some(body)))
    }
}
