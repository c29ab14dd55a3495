//! HTTP Feed Adapter
//!
//! reqwest-backed [`RecordSource`] over the upstream call-record feed.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use callboard::{DomainError, RecordSource};

/// Fetches the raw payload from the configured feed URL.
///
/// One outstanding request at a time per caller; responses are never
/// cached, so the last response to arrive is the one that counts.
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpFeed {
    async fn fetch(&self) -> Result<Value, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DomainError::UpstreamStatus {
                status: resp.status().as_u16(),
            });
        }

        resp.json::<Value>()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))
    }
}
