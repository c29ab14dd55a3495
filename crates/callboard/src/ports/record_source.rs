//! Record Source Port
//!
//! Abstract interface for fetching the raw feed payload.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainError;

/// Source of the raw decoded call-record payload.
///
/// The endpoint behind an implementation is injected configuration, never a
/// hard-coded literal, so the pipeline can be exercised against an
/// in-memory double.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the raw decoded payload.
    async fn fetch(&self) -> Result<Value, DomainError>;
}
