//! Feed Client
//!
//! Fetches the raw call-record payload from the configured feed URL.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde_json::Value;

use callboard::services::normalize;
use callboard::CallRecord;

/// HTTP client for the call-record feed.
pub struct FeedClient {
    client: Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }

    /// Fetch the raw feed payload
    pub async fn fetch_payload(&self) -> Result<Value> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to connect to the call-record feed")?;

        if !resp.status().is_success() {
            bail!("Feed request failed (HTTP status {})", resp.status().as_u16());
        }

        let payload: Value = resp
            .json()
            .await
            .context("Failed to parse feed response as JSON")?;

        Ok(payload)
    }

    /// Fetch and normalize the full record set
    pub async fn fetch_records(&self) -> Result<Vec<CallRecord>> {
        let payload = self.fetch_payload().await?;
        Ok(normalize::extract_records(&payload))
    }
}
