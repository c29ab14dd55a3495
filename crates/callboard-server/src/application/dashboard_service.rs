//! Dashboard Application Service
//!
//! Orchestrates fetch -> normalize -> aggregate -> view assembly. Every
//! call re-fetches the feed and works on a fresh record list; nothing is
//! cached, so a failed fetch can never leave stale records behind.

use std::sync::Arc;

use chrono::Utc;

use callboard::services::{analytics, normalize, view};
use callboard::{CallRecord, DomainError, RecordSource};

/// Application service for the dashboard routes.
pub struct DashboardService<S: RecordSource> {
    source: Arc<S>,
}

impl<S: RecordSource> DashboardService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch and normalize the full record set.
    async fn load(&self) -> Result<Vec<CallRecord>, DomainError> {
        let payload = self.source.fetch().await?;
        let records = normalize::extract_records(&payload);
        tracing::debug!(count = records.len(), "normalized feed records");
        Ok(records)
    }

    /// Complete dashboard view.
    pub async fn dashboard(&self) -> Result<view::DashboardView, DomainError> {
        let records = self.load().await?;
        Ok(view::dashboard(&records, Utc::now()))
    }

    /// Stat cards only.
    pub async fn stats(&self) -> Result<Vec<view::StatCard>, DomainError> {
        let records = self.load().await?;
        Ok(view::stat_cards(&analytics::summarize(&records)))
    }

    /// The four chart datasets.
    pub async fn charts(&self) -> Result<view::DashboardCharts, DomainError> {
        let records = self.load().await?;
        Ok(view::charts(&records))
    }

    /// Filtered table view.
    pub async fn calls(
        &self,
        search_term: &str,
        status_filter: &str,
    ) -> Result<view::CallTable, DomainError> {
        let records = self.load().await?;
        Ok(view::call_table(&records, search_term, status_filter))
    }

    /// Detail view for one call id, `None` when the id is unknown.
    pub async fn call_detail(&self, call_id: &str) -> Result<Option<view::CallDetail>, DomainError> {
        let records = self.load().await?;
        Ok(records
            .iter()
            .find(|record| record.call_id == call_id)
            .map(view::call_detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct StaticFeed {
        payload: Value,
    }

    #[async_trait]
    impl RecordSource for StaticFeed {
        async fn fetch(&self) -> Result<Value, DomainError> {
            Ok(self.payload.clone())
        }
    }

    struct FailingFeed {
        status: u16,
    }

    #[async_trait]
    impl RecordSource for FailingFeed {
        async fn fetch(&self) -> Result<Value, DomainError> {
            Err(DomainError::UpstreamStatus {
                status: self.status,
            })
        }
    }

    fn service_with(payload: Value) -> DashboardService<StaticFeed> {
        DashboardService::new(Arc::new(StaticFeed { payload }))
    }

    #[tokio::test]
    async fn test_dashboard_from_wrapped_payload() {
        let service = service_with(json!({
            "data": [
                { "Saloon Name": "Shear Genius", "Need AI-Agent ? (Yes/No)": true },
                { "Saloon Name": "Curl Up & Dye" },
            ]
        }));

        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.stats[0].value, 2);
        assert_eq!(dashboard.stats[2].value, 1);
    }

    #[tokio::test]
    async fn test_unrecognized_payload_serves_an_empty_dashboard() {
        let service = service_with(json!({ "foo": "bar" }));
        let dashboard = service.dashboard().await.unwrap();
        assert_eq!(dashboard.stats[0].value, 0);
        assert!(dashboard.charts.outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_calls_filters_by_query() {
        let service = service_with(json!([
            { "Saloon Name": "Shear Genius", "Status": "called", "Phone Number": "555-1234" },
            { "Saloon Name": "The Mane Event", "Status": "failed", "Phone Number": "777-0000" },
        ]));

        let table = service.calls("555", "all").await.unwrap();
        assert_eq!(table.total_records, 2);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].business_name, "Shear Genius");
    }

    #[tokio::test]
    async fn test_call_detail_by_id() {
        let service = service_with(json!([
            { "Call_ID": "CALL-001", "Saloon Name": "Shear Genius" },
        ]));

        let detail = service.call_detail("CALL-001").await.unwrap();
        assert_eq!(detail.unwrap().business_name, "Shear Genius");

        let missing = service.call_detail("CALL-404").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_message_names_the_status() {
        let service = DashboardService::new(Arc::new(FailingFeed { status: 500 }));
        let err = service.dashboard().await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    struct RecoveringFeed {
        failed_once: std::sync::Mutex<bool>,
        payload: Value,
    }

    #[async_trait]
    impl RecordSource for RecoveringFeed {
        async fn fetch(&self) -> Result<Value, DomainError> {
            let mut failed = self.failed_once.lock().unwrap();
            if !*failed {
                *failed = true;
                return Err(DomainError::UpstreamStatus { status: 500 });
            }
            Ok(self.payload.clone())
        }
    }

    #[tokio::test]
    async fn test_refresh_recovers_after_failure() {
        let service = DashboardService::new(Arc::new(RecoveringFeed {
            failed_once: std::sync::Mutex::new(false),
            payload: json!([{ "Call_ID": "CALL-001" }]),
        }));

        let err = service.stats().await.unwrap_err();
        assert!(err.to_string().contains("500"));

        // A later fetch starts from scratch and repopulates.
        let cards = service.stats().await.unwrap();
        assert_eq!(cards[0].value, 1);
    }
}
