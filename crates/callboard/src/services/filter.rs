//! Table Filtering
//!
//! Search and status predicates for the call table. Filtering only shapes
//! the table view; aggregation always runs over the full record set.

use crate::domain::entities::CallRecord;

/// Sentinel status filter that matches every record.
pub const STATUS_ALL: &str = "all";

/// Apply the search term and status filter, preserving input order.
///
/// The search term matches case-insensitively against business name and
/// call id, and as a raw substring against the phone number (so "555"
/// matches "+1-555-9999" without case folding digits and punctuation).
/// The status filter requires exact equality with a non-empty status
/// unless it is the [`STATUS_ALL`] sentinel. A record must pass both.
pub fn filter_records(
    records: &[CallRecord],
    search_term: &str,
    status_filter: &str,
) -> Vec<CallRecord> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .filter(|record| {
            matches_search(record, search_term, &needle) && matches_status(record, status_filter)
        })
        .cloned()
        .collect()
}

fn matches_search(record: &CallRecord, raw_term: &str, lowered_term: &str) -> bool {
    record.business_name.to_lowercase().contains(lowered_term)
        || record.phone_number.contains(raw_term)
        || record.call_id.to_lowercase().contains(lowered_term)
}

fn matches_status(record: &CallRecord, status_filter: &str) -> bool {
    status_filter == STATUS_ALL || (!record.status.is_empty() && record.status == status_filter)
}

/// Distinct non-empty status values, in order of first appearance. This is
/// the option set a UI offers next to the [`STATUS_ALL`] sentinel.
pub fn status_options(records: &[CallRecord]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for record in records {
        if !record.status.is_empty() && !options.contains(&record.status) {
            options.push(record.status.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(business_name: &str, phone_number: &str, call_id: &str, status: &str) -> CallRecord {
        CallRecord {
            business_name: business_name.to_string(),
            phone_number: phone_number.to_string(),
            call_id: call_id.to_string(),
            status: status.to_string(),
            ..CallRecord::default()
        }
    }

    fn sample_records() -> Vec<CallRecord> {
        vec![
            sample_record("Shear Genius", "555-1234", "CALL-001", "called"),
            sample_record("Curl Up & Dye", "+1-555-9999", "CALL-002", "failed"),
            sample_record("The Mane Event", "777-0000", "CALL-003", "in progress"),
        ]
    }

    #[test]
    fn test_empty_search_and_all_sentinel_is_identity() {
        let records = sample_records();
        assert_eq!(filter_records(&records, "", STATUS_ALL), records);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_records();
        let once = filter_records(&records, "555", "called");
        let twice = filter_records(&once, "555", "called");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_business_name_matches_case_insensitively() {
        let records = sample_records();
        let matched = filter_records(&records, "shear", STATUS_ALL);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].business_name, "Shear Genius");
    }

    #[test]
    fn test_phone_number_matches_raw_substring() {
        let records = sample_records();
        let matched = filter_records(&records, "555", STATUS_ALL);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_call_id_matches_case_insensitively() {
        let records = sample_records();
        let matched = filter_records(&records, "call-003", STATUS_ALL);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].call_id, "CALL-003");
    }

    #[test]
    fn test_status_filter_is_exact_and_case_sensitive() {
        let records = sample_records();
        assert_eq!(filter_records(&records, "", "called").len(), 1);
        assert!(filter_records(&records, "", "Called").is_empty());
        // "in progress" must match whole, not as a substring of anything.
        assert_eq!(filter_records(&records, "", "in progress").len(), 1);
    }

    #[test]
    fn test_both_predicates_must_pass() {
        let records = sample_records();
        assert!(filter_records(&records, "Shear", "failed").is_empty());
        assert_eq!(filter_records(&records, "555", "failed").len(), 1);
    }

    #[test]
    fn test_empty_status_never_matches_a_concrete_filter() {
        let records = vec![sample_record("No Status Co", "123", "CALL-009", "")];
        assert!(filter_records(&records, "", "called").is_empty());
        assert_eq!(filter_records(&records, "", STATUS_ALL).len(), 1);
    }

    #[test]
    fn test_status_options_are_distinct_in_first_appearance_order() {
        let mut records = sample_records();
        records.push(sample_record("Encore", "888", "CALL-004", "called"));
        records.push(sample_record("Blank", "999", "CALL-005", ""));

        assert_eq!(
            status_options(&records),
            vec!["called", "failed", "in progress"]
        );
    }
}
