//! PokeAPI entity fetcher.
//!
//! One request per call: no retries, no pagination, transport-default
//! redirects and the client's timeout.

use super::client::HttpClient;
use super::record::EntityRecord;
use crate::config::NetworkConfig;
use crate::{GateError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Something that can produce entity records by name or pokedex number.
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// Fetch a record by (already normalised) name.
    async fn fetch_by_name(&self, name: &str) -> Result<EntityRecord>;

    /// Fetch a record by numeric identifier.
    async fn fetch_by_id(&self, id: u32) -> Result<EntityRecord>;
}

/// Fetches records from the PokeAPI REST endpoint.
pub struct PokeApiFetcher {
    http: Arc<HttpClient>,
    base_url: String,
}

impl PokeApiFetcher {
    /// Create a fetcher against the public PokeAPI.
    pub fn new() -> Result<Self> {
        Self::with_base_url(NetworkConfig::POKEAPI_BASE)
    }

    /// Create a fetcher against a custom base URL (e.g. a mirror or a stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::new()?;
        Ok(Self::with_client(Arc::new(http), base_url))
    }

    /// Create a fetcher sharing an existing HTTP client.
    pub fn with_client(http: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a lookup by name. The name is percent-encoded as one segment.
    pub fn name_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(name))
    }

    /// URL for a lookup by numeric identifier.
    pub fn id_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn fetch(&self, url: &str, subject: &str) -> Result<EntityRecord> {
        let response = self.http.get(url).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GateError::NotFound {
                name: subject.to_string(),
            });
        }

        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, subject);
            return Err(GateError::UpstreamUnavailable {
                message: format!("upstream returned {}", status),
                status_code: Some(status.as_u16()),
            });
        }

        let body = response.bytes().await.map_err(|e| GateError::UpstreamUnavailable {
            message: format!("failed to read upstream body: {}", e),
            status_code: Some(status.as_u16()),
        })?;

        let record = decode_record(&body)?;
        info!("Fetched {} from upstream", subject);
        Ok(record)
    }
}

#[async_trait]
impl EntitySource for PokeApiFetcher {
    async fn fetch_by_name(&self, name: &str) -> Result<EntityRecord> {
        if name.is_empty() {
            return Err(GateError::NotFound {
                name: String::new(),
            });
        }
        let url = self.name_url(name);
        self.fetch(&url, name).await
    }

    async fn fetch_by_id(&self, id: u32) -> Result<EntityRecord> {
        let url = self.id_url(id);
        self.fetch(&url, &id.to_string()).await
    }
}

/// Decode an upstream body into a record. Only JSON objects are accepted.
pub fn decode_record(body: &[u8]) -> Result<EntityRecord> {
    let value: Value = serde_json::from_slice(body).map_err(|e| GateError::MalformedResponse {
        message: e.to_string(),
    })?;

    if !value.is_object() {
        return Err(GateError::MalformedResponse {
            message: "expected a JSON object".to_string(),
        });
    }

    Ok(EntityRecord::new(value))
}
