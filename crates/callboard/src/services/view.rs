//! View-Model Assembly
//!
//! Maps aggregation output into display-ready structures. Formatting only:
//! nothing here recomputes what the aggregation engine already produced,
//! and every structure is fresh.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::{short_id, CallRecord};
use crate::domain::value_objects::StatusTone;
use crate::services::analytics::{
    self, CallSummary, EngagementRollup, OutcomeBucket, SessionRollup,
};
use crate::services::filter;

/// Placeholder for absent display text.
const NOT_AVAILABLE: &str = "N/A";

/// One stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatCard {
    pub title: String,
    pub value: usize,
    pub description: String,
}

/// One slice of the outcome pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OutcomeSlice {
    pub label: String,
    pub value: usize,
    /// Share of the included buckets, one decimal place.
    pub percentage: String,
    /// Fixed hex color for the slice.
    pub color: String,
}

/// One point of the correlation scatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScatterPoint {
    /// 1 when the bucket's records expressed AI interest.
    pub x: u8,
    /// 1 when the bucket's records booked an appointment.
    pub y: u8,
    pub label: String,
    pub count: usize,
    /// Share of the included buckets, one decimal place.
    pub percentage: String,
}

/// The four chart datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardCharts {
    pub outcomes: Vec<OutcomeSlice>,
    pub sessions: Vec<SessionRollup>,
    pub engagement: Vec<EngagementRollup>,
    pub correlation: Vec<ScatterPoint>,
}

/// One row of the call table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CallRow {
    pub business_name: String,
    pub phone_number: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub call_id: String,
    /// "Booked" or "No".
    pub appointment: String,
    /// "Yes" or "No".
    pub ai_interest: String,
}

/// Filtered table view: the options offered for the status filter plus the
/// rows that survived both predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CallTable {
    /// Record count before filtering.
    pub total_records: usize,
    pub status_options: Vec<String>,
    pub rows: Vec<CallRow>,
}

/// Full detail view for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CallDetail {
    pub business_name: String,
    pub call_id: String,
    /// Short session label, `N/A` when the record carried no session id.
    pub session: String,
    pub phone_number: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub appointment_booked: bool,
    pub ai_interest: bool,
    pub summary: String,
    pub transcript: String,
    /// Absent when the feed supplied no recording; presentation then
    /// suppresses recording elements entirely.
    pub recording_url: Option<String>,
}

/// Complete dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardView {
    pub stats: Vec<StatCard>,
    pub charts: DashboardCharts,
    /// When the underlying records were fetched.
    pub fetched_at: DateTime<Utc>,
}

/// The four stat cards.
pub fn stat_cards(summary: &CallSummary) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Calls Made".to_string(),
            value: summary.total_calls,
            description: "All outbound calls completed".to_string(),
        },
        StatCard {
            title: "Appointments Booked".to_string(),
            value: summary.appointments_booked,
            description: "Successful bookings secured".to_string(),
        },
        StatCard {
            title: "AI Interest Generated".to_string(),
            value: summary.ai_interest,
            description: "Prospects interested in AI".to_string(),
        },
        StatCard {
            title: "Call Sessions".to_string(),
            value: summary.unique_sessions,
            description: "Unique calling sessions".to_string(),
        },
    ]
}

/// Pie slices for the outcome partition.
pub fn outcome_slices(buckets: &[OutcomeBucket]) -> Vec<OutcomeSlice> {
    let included_total: usize = buckets.iter().map(|bucket| bucket.count).sum();

    buckets
        .iter()
        .map(|bucket| OutcomeSlice {
            label: bucket.outcome.label().to_string(),
            value: bucket.count,
            percentage: percent_label(bucket.count, included_total),
            color: bucket.outcome.color().to_string(),
        })
        .collect()
}

/// Scatter points for the correlation buckets.
pub fn scatter_points(buckets: &[OutcomeBucket]) -> Vec<ScatterPoint> {
    let included_total: usize = buckets.iter().map(|bucket| bucket.count).sum();

    buckets
        .iter()
        .map(|bucket| {
            let (x, y) = bucket.outcome.coordinates();
            ScatterPoint {
                x,
                y,
                label: bucket.outcome.scatter_label().to_string(),
                count: bucket.count,
                percentage: percent_label(bucket.count, included_total),
            }
        })
        .collect()
}

/// Assemble the four chart datasets.
pub fn charts(records: &[CallRecord]) -> DashboardCharts {
    DashboardCharts {
        outcomes: outcome_slices(&analytics::outcome_partition(records)),
        sessions: analytics::session_rollups(records),
        engagement: analytics::engagement_rollups(records),
        correlation: scatter_points(&analytics::correlation_buckets(records)),
    }
}

/// Assemble the filtered table view.
pub fn call_table(records: &[CallRecord], search_term: &str, status_filter: &str) -> CallTable {
    let rows = filter::filter_records(records, search_term, status_filter)
        .iter()
        .map(call_row)
        .collect();

    CallTable {
        total_records: records.len(),
        status_options: filter::status_options(records),
        rows,
    }
}

fn call_row(record: &CallRecord) -> CallRow {
    CallRow {
        business_name: or_not_available(&record.business_name),
        phone_number: or_not_available(&record.phone_number),
        status: status_label(&record.status),
        status_tone: StatusTone::of(&record.status),
        call_id: or_not_available(&record.call_id),
        appointment: if record.appointment_booked { "Booked" } else { "No" }.to_string(),
        ai_interest: if record.ai_interest { "Yes" } else { "No" }.to_string(),
    }
}

/// Assemble the detail view for one record.
pub fn call_detail(record: &CallRecord) -> CallDetail {
    CallDetail {
        business_name: if record.business_name.is_empty() {
            "Unknown Business".to_string()
        } else {
            record.business_name.clone()
        },
        call_id: or_not_available(&record.call_id),
        session: if record.session_id.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            short_id(&record.session_id)
        },
        phone_number: or_not_available(&record.phone_number),
        status: status_label(&record.status),
        status_tone: StatusTone::of(&record.status),
        appointment_booked: record.appointment_booked,
        ai_interest: record.ai_interest,
        summary: if record.summary.is_empty() {
            "No summary available".to_string()
        } else {
            record.summary.clone()
        },
        transcript: if record.transcript.is_empty() {
            "No transcript available".to_string()
        } else {
            record.transcript.clone()
        },
        recording_url: if record.recording_url.is_empty() {
            None
        } else {
            Some(record.recording_url.clone())
        },
    }
}

/// Assemble the complete dashboard view.
pub fn dashboard(records: &[CallRecord], fetched_at: DateTime<Utc>) -> DashboardView {
    DashboardView {
        stats: stat_cards(&analytics::summarize(records)),
        charts: charts(records),
        fetched_at,
    }
}

/// `toFixed(1)`-style share of a total; `"0"` when the denominator is zero.
fn percent_label(value: usize, included_total: usize) -> String {
    if included_total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", value as f64 / included_total as f64 * 100.0)
}

fn or_not_available(text: &str) -> String {
    if text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

fn status_label(status: &str) -> String {
    if status.is_empty() {
        "Unknown".to_string()
    } else {
        status.to_string()
    }
}
