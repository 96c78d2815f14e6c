//! Transport for suggestion requests
//!
//! Defines the FetchError taxonomy, the Transport seam used by the source
//! chain, and the reqwest-backed HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::fetch_gate::{FetchGate, FetchRoute};
use crate::error::NewtabError;

/// Reasons a single source produced no data
///
/// None of these reach the caller of the chain: each one only means
/// "try the next source".
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Body was empty or not JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON did not match the source's expected shape
    #[error("Unexpected response shape")]
    Shape,

    /// The fetch gate does not allow network access
    #[error("Fetching disabled in this context")]
    Disabled,
}

/// Issues a GET and decodes the body as JSON
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// HTTP transport using a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    gate: FetchGate,
}

impl HttpTransport {
    /// Create a transport with a per-request timeout
    pub fn new(gate: FetchGate, timeout: Duration) -> Result<Self, NewtabError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewtabError::HttpClient(e.to_string()))?;

        Ok(Self { client, gate })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        if self.gate.route() == FetchRoute::Abstain {
            return Err(FetchError::Disabled);
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(FetchError::Parse("empty body".to_string()));
        }

        serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod transport_tests;
