//! StatusTone - Presentation tone for free-form status labels

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Badge tone for a call status. The feed's status column is free-form, so
/// unknown labels degrade to [`StatusTone::Neutral`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Info,
    Danger,
    Neutral,
}

impl StatusTone {
    /// Map a status label, case-insensitively.
    pub fn of(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "called" => StatusTone::Success,
            "in progress" => StatusTone::Info,
            "failed" => StatusTone::Danger,
            _ => StatusTone::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_map_case_insensitively() {
        assert_eq!(StatusTone::of("called"), StatusTone::Success);
        assert_eq!(StatusTone::of("Called"), StatusTone::Success);
        assert_eq!(StatusTone::of("In Progress"), StatusTone::Info);
        assert_eq!(StatusTone::of("FAILED"), StatusTone::Danger);
    }

    #[test]
    fn test_unknown_status_is_neutral() {
        assert_eq!(StatusTone::of("voicemail"), StatusTone::Neutral);
        assert_eq!(StatusTone::of(""), StatusTone::Neutral);
    }
}
