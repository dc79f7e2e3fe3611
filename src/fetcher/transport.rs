//! HTTP transport abstraction
//!
//! The fetcher only needs "GET this URL and tell me the status and body".
//! Keeping that behind [`HttpTransport`] lets retry behaviour be tested
//! with scripted transports instead of a network.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::constants::USER_AGENT;
use crate::error::TransportError;

/// A completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability to retrieve a resource as text
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one GET request
    ///
    /// `Err` means no response was obtained. A response with any status,
    /// including 4xx/5xx, is `Ok`.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client, optionally bounding each request by `timeout`
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::with_source("Failed to create HTTP client", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("Timeout fetching '{}'", url)
            } else if e.is_connect() {
                format!("Connection failed for '{}'", url)
            } else {
                format!("Request to '{}' failed", url)
            };
            TransportError::with_source(message, e)
        })?;

        let status = response.status().as_u16();
        debug!("GET {} -> {}", url, status);

        // Failed responses are reported by status alone
        if !response.status().is_success() {
            return Ok(HttpResponse::new(status, String::new()));
        }

        let body = response.text().await.map_err(|e| {
            TransportError::with_source(format!("Failed to read response body from '{}'", url), e)
        })?;

        Ok(HttpResponse::new(status, body))
    }
}
