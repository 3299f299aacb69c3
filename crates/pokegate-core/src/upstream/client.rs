//! Thin HTTP client wrapper around reqwest.
//!
//! Adds a user agent, a default request timeout, and maps transport failures
//! into [`GateError::UpstreamUnavailable`]. Status codes are left to callers.

use crate::config::NetworkConfig;
use crate::{GateError, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client used for upstream calls.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_timeout(NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a new HTTP client with a custom default timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| GateError::UpstreamUnavailable {
                message: format!("Failed to create HTTP client: {}", e),
                status_code: None,
            })?;

        Ok(Self { client })
    }

    /// Make a GET request. Non-success statuses are returned, not mapped.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GateError::UpstreamUnavailable {
                message: format!("GET {} failed: {}", url, e),
                status_code: None,
            })?;

        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }
}
