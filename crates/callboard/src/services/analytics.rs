//! Aggregation Engine
//!
//! Pure rollups over the full normalized record set. Every function takes
//! the records by reference and returns fresh structures; nothing here
//! mutates a record or depends on call order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::{short_id, CallRecord};
use crate::domain::value_objects::{EngagementLevel, Outcome};

/// Headline counters for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSummary {
    pub total_calls: usize,
    pub appointments_booked: usize,
    pub ai_interest: usize,
    /// Distinct non-empty session ids.
    pub unique_sessions: usize,
}

/// One bucket of the outcome partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeBucket {
    pub outcome: Outcome,
    pub count: usize,
}

/// Per-session rollup for the sessions bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionRollup {
    /// Full grouping key ([`crate::domain::entities::UNKNOWN_SESSION`] for
    /// records without a session id).
    pub session_id: String,
    /// Trailing 8 characters of the key, the chart axis label.
    pub short_id: String,
    pub total_calls: usize,
    pub appointments: usize,
    pub ai_interest: usize,
    /// See [`success_rate`].
    pub success_rate: u8,
}

/// Per-engagement-level rollup for the engagement bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EngagementRollup {
    pub level: EngagementLevel,
    pub total_calls: usize,
    pub appointments: usize,
    pub ai_interest: usize,
    /// See [`success_rate`].
    pub success_rate: u8,
}

/// Compute the headline counters.
pub fn summarize(records: &[CallRecord]) -> CallSummary {
    let unique_sessions = records
        .iter()
        .filter(|record| !record.session_id.is_empty())
        .map(|record| record.session_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    CallSummary {
        total_calls: records.len(),
        appointments_booked: records
            .iter()
            .filter(|record| record.appointment_booked)
            .count(),
        ai_interest: records.iter().filter(|record| record.ai_interest).count(),
        unique_sessions,
    }
}

/// The outcome partition in pie order. Counts across all four buckets sum
/// to the record count; zero buckets are omitted from the result.
pub fn outcome_partition(records: &[CallRecord]) -> Vec<OutcomeBucket> {
    partition_in_order(records, &Outcome::CHART_ORDER)
}

/// The outcome partition in scatter order, for the correlation chart.
/// Zero buckets are omitted.
pub fn correlation_buckets(records: &[CallRecord]) -> Vec<OutcomeBucket> {
    partition_in_order(records, &Outcome::SCATTER_ORDER)
}

fn partition_in_order(records: &[CallRecord], order: &[Outcome; 4]) -> Vec<OutcomeBucket> {
    let counts = outcome_counts(records);

    order
        .iter()
        .map(|&outcome| OutcomeBucket {
            outcome,
            count: counts[outcome as usize],
        })
        .filter(|bucket| bucket.count > 0)
        .collect()
}

fn outcome_counts(records: &[CallRecord]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for record in records {
        counts[Outcome::of(record) as usize] += 1;
    }
    counts
}

/// Group records by session id in a single pass. Groups appear in order of
/// first appearance; records without a session id share the reserved
/// unknown bucket.
pub fn session_rollups(records: &[CallRecord]) -> Vec<SessionRollup> {
    let mut groups: Vec<SessionRollup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.session_key();
        let slot = *slots.entry(key.to_string()).or_insert_with(|| {
            groups.push(SessionRollup {
                session_id: key.to_string(),
                short_id: short_id(key),
                total_calls: 0,
                appointments: 0,
                ai_interest: 0,
                success_rate: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_calls += 1;
        if record.appointment_booked {
            group.appointments += 1;
        }
        if record.ai_interest {
            group.ai_interest += 1;
        }
    }

    for group in &mut groups {
        group.success_rate = success_rate(group.appointments, group.ai_interest, group.total_calls);
    }

    groups
}

/// Classify every record and roll up by engagement level, in order of first
/// appearance.
pub fn engagement_rollups(records: &[CallRecord]) -> Vec<EngagementRollup> {
    let mut groups: Vec<EngagementRollup> = Vec::new();
    let mut slots: HashMap<EngagementLevel, usize> = HashMap::new();

    for record in records {
        let level = EngagementLevel::of(record);
        let slot = *slots.entry(level).or_insert_with(|| {
            groups.push(EngagementRollup {
                level,
                total_calls: 0,
                appointments: 0,
                ai_interest: 0,
                success_rate: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_calls += 1;
        if record.appointment_booked {
            group.appointments += 1;
        }
        if record.ai_interest {
            group.ai_interest += 1;
        }
    }

    for group in &mut groups {
        group.success_rate = success_rate(group.appointments, group.ai_interest, group.total_calls);
    }

    groups
}

/// `round(100 x (appointments + ai_interest) / total_calls)`, ties away
/// from zero, clamped to 100 (both flags can be set on one record, so the
/// raw ratio can exceed 1). Zero when the group is empty.
pub fn success_rate(appointments: usize, ai_interest: usize, total_calls: usize) -> u8 {
    if total_calls == 0 {
        return 0;
    }

    let rate = ((appointments + ai_interest) as f64 / total_calls as f64 * 100.0).round();
    rate.min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(session_id: &str, ai_interest: bool, appointment_booked: bool) -> CallRecord {
        CallRecord {
            session_id: session_id.to_string(),
            ai_interest,
            appointment_booked,
            ..CallRecord::default()
        }
    }

    #[test]
    fn test_summary_counters() {
        let records = vec![
            sample_record("s1", true, true),
            sample_record("s1", false, true),
            sample_record("s2", true, false),
            sample_record("", false, false),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total_calls, 4);
        assert_eq!(summary.appointments_booked, 2);
        assert_eq!(summary.ai_interest, 2);
        assert_eq!(summary.unique_sessions, 2);
        assert!(summary.appointments_booked <= summary.total_calls);
        assert!(summary.ai_interest <= summary.total_calls);
    }

    #[test]
    fn test_partition_sums_to_total() {
        let records = vec![
            sample_record("s", true, true),
            sample_record("s", true, false),
            sample_record("s", false, true),
            sample_record("s", false, false),
            sample_record("s", false, false),
        ];

        let buckets = outcome_partition(&records);
        let sum: usize = buckets.iter().map(|bucket| bucket.count).sum();
        assert_eq!(sum, records.len());
    }

    #[test]
    fn test_zero_buckets_are_omitted() {
        // One fully-booked call and one dead call: the two mixed buckets
        // disappear from the output.
        let records = vec![
            sample_record("s", true, true),
            sample_record("s", false, false),
        ];

        let buckets = outcome_partition(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].outcome, Outcome::InterestAndAppointment);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].outcome, Outcome::NoInterest);
        assert_eq!(buckets[1].count, 1);
    }

    #[test]
    fn test_correlation_matches_the_partition() {
        let records = vec![
            sample_record("s", true, true),
            sample_record("s", true, false),
            sample_record("s", false, false),
        ];

        let pie = outcome_partition(&records);
        let scatter = correlation_buckets(&records);
        assert_eq!(pie.len(), scatter.len());
        for bucket in &scatter {
            let twin = pie.iter().find(|b| b.outcome == bucket.outcome).unwrap();
            assert_eq!(twin.count, bucket.count);
        }
        // Scatter order walks the grid from the origin.
        assert_eq!(scatter[0].outcome, Outcome::NoInterest);
    }

    #[test]
    fn test_session_rollups_group_and_sum() {
        let records = vec![
            sample_record("session-abc-12345678", true, true),
            sample_record("session-abc-12345678", false, false),
            sample_record("session-xyz-87654321", false, true),
            sample_record("", true, false),
        ];

        let groups = session_rollups(&records);
        assert_eq!(groups.len(), 3);

        let total: usize = groups.iter().map(|group| group.total_calls).sum();
        assert_eq!(total, records.len());

        assert_eq!(groups[0].session_id, "session-abc-12345678");
        assert_eq!(groups[0].short_id, "12345678");
        assert_eq!(groups[0].total_calls, 2);
        assert_eq!(groups[0].appointments, 1);
        assert_eq!(groups[0].ai_interest, 1);
        // (1 + 1) / 2 = 100%
        assert_eq!(groups[0].success_rate, 100);

        assert_eq!(groups[2].session_id, "unknown_session");
        assert_eq!(groups[2].total_calls, 1);
    }

    #[test]
    fn test_engagement_rollups_group_by_level() {
        let long_summary = "s".repeat(250);
        let long_transcript = "t".repeat(600);
        let records = vec![
            CallRecord {
                summary: long_summary,
                transcript: long_transcript,
                appointment_booked: true,
                ..CallRecord::default()
            },
            CallRecord {
                summary: "m".repeat(150),
                ..CallRecord::default()
            },
            CallRecord::default(),
            CallRecord::default(),
        ];

        let groups = engagement_rollups(&records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].level, EngagementLevel::High);
        assert_eq!(groups[0].appointments, 1);
        assert_eq!(groups[0].success_rate, 100);
        assert_eq!(groups[1].level, EngagementLevel::Medium);
        assert_eq!(groups[2].level, EngagementLevel::Low);
        assert_eq!(groups[2].total_calls, 2);
        assert_eq!(groups[2].success_rate, 0);
    }

    #[test]
    fn test_success_rate_rounds_half_away_from_zero() {
        // 1 / 8 = 12.5% -> 13
        assert_eq!(success_rate(1, 0, 8), 13);
        // 3 / 8 = 37.5% -> 38
        assert_eq!(success_rate(3, 0, 8), 38);
        // 1 / 3 = 33.33% -> 33
        assert_eq!(success_rate(1, 0, 3), 33);
    }

    #[test]
    fn test_success_rate_bounds() {
        assert_eq!(success_rate(0, 0, 5), 0);
        assert_eq!(success_rate(0, 0, 0), 0);
        // Both flags on every record would overshoot; the rate caps at 100.
        assert_eq!(success_rate(2, 2, 2), 100);
    }

    #[test]
    fn test_aggregation_is_pure() {
        let records = vec![
            sample_record("s1", true, false),
            sample_record("s2", false, true),
        ];

        assert_eq!(summarize(&records), summarize(&records));
        assert_eq!(outcome_partition(&records), outcome_partition(&records));
        assert_eq!(session_rollups(&records), session_rollups(&records));
    }
}
