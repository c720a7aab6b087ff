//! The transport capability and its reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::request::{ApiRequest, Method};

/// Request timeout for the reqwest transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A transport failed to deliver response bytes.
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Capability that sends a request and returns the raw response body.
///
/// Exactly one outcome per invocation: the body bytes, or a failure.
/// Implementations set their own concurrency limits; the client imposes
/// none. Test doubles implement this to replace the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>, TransportError>;
}

/// Production transport backed by reqwest.
///
/// Builds a fresh `reqwest::Client` per request with a 30-second timeout.
/// HTTP status is not interpreted: any response that yields a body
/// produces its bytes, and decoding classifies the rest.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    timeout: Duration,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {}", e)))?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = client.request(method, request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(format!("failed to send request: {}", e)))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("failed to read response body: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
