//! HTTP client abstraction for testability

use super::types::{HttpResponse, ProviderError};
use std::time::Duration;
use tracing::{trace, warn};

/// Trait for blocking HTTP GET requests.
///
/// This abstraction allows mock HTTP clients in tests. Implementations
/// return `Ok` for every response that arrived, whatever its status; `Err`
/// is reserved for requests that produced no response at all.
pub trait HttpClient: Send + Sync {
    /// Performs a blocking HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response status and body, or an error if no response was received.
    fn get(&self, url: &str) -> Result<HttpResponse, ProviderError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, url: &str) -> Result<HttpResponse, ProviderError> {
        (**self).get(url)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    fn get(&self, url: &str) -> Result<HttpResponse, ProviderError> {
        (**self).get(url)
    }
}

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
/// Some tile servers reject requests without a User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("gzsatellite/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| ProviderError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, ProviderError> {
        trace!(url = url, "HTTP GET request starting");

        let response = self.client.get(url).send().map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            ProviderError::HttpError(format!("Request failed: {}", e))
        })?;

        let status = response.status().as_u16();

        let body = response.bytes().map_err(|e| {
            warn!(url = url, error = %e, "Failed to read response body");
            ProviderError::HttpError(format!("Failed to read response: {}", e))
        })?;

        trace!(url = url, status, bytes = body.len(), "HTTP response received");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
