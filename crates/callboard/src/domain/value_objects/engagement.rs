//! EngagementLevel - Call depth classification from text lengths

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::CallRecord;

/// How substantial a call was, derived from summary and transcript lengths.
/// Total over records: every record maps to exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    /// Classify by text lengths (in characters).
    ///
    /// High needs both a long summary (> 200) and a long transcript (> 500);
    /// Medium needs either a moderate summary (> 100) or transcript (> 300).
    pub fn classify(summary_len: usize, transcript_len: usize) -> Self {
        if summary_len > 200 && transcript_len > 500 {
            EngagementLevel::High
        } else if summary_len > 100 || transcript_len > 300 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        }
    }

    /// Classify a record.
    pub fn of(record: &CallRecord) -> Self {
        Self::classify(
            record.summary.chars().count(),
            record.transcript.chars().count(),
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "Low",
            EngagementLevel::Medium => "Medium",
            EngagementLevel::High => "High",
        }
    }
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
