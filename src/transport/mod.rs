//! Remote fetch seam
//!
//! The connector performs at most one GET per breakpoint or info
//! resolution. The fetch sits behind a trait so tests can inject a fake
//! service; the production implementation rides on reqwest. Timeouts and
//! cancellation are the transport's business, not the connector's.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::constants::VENDOR_ERROR_HEADER;

/// Failure surfaced by a transport GET
///
/// Carries the response status and headers when a response was received,
/// so callers can extract a vendor-specific failure reason.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    /// HTTP status, when a response was received
    pub status: Option<u16>,
    /// Response headers (lowercased names), when a response was received
    pub headers: BTreeMap<String, String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            headers: BTreeMap::new(),
        }
    }

    /// Look up a response header by its lowercased name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

/// Strategy extracting a human-readable reason from a transport failure
///
/// Injectable so the connector stays testable without a real HTTP stack.
pub type ReasonExtractor = fn(&TransportError) -> String;

/// Default reason extraction: the vendor error header when present, else
/// the raw transport message
pub fn vendor_header_reason(err: &TransportError) -> String {
    err.header(VENDOR_ERROR_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| err.message.clone())
}

/// One-shot JSON GET against a built URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<JsonValue, TransportError>;
}

/// reqwest-backed transport used outside tests
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl HttpTransport {
    /// Build a transport with an explicit per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created
    /// (e.g. TLS backend initialization failure).
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<JsonValue, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
                })
                .collect();
            return Err(TransportError {
                message: format!("request failed with status {}", status),
                status: Some(status.as_u16()),
                headers,
            });
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::new(format!("invalid JSON body: {}", e)))
    }
}
