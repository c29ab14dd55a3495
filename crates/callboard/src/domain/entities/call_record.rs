//! CallRecord - One logged outbound call attempt
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Deserializer, Serialize};

/// Grouping key for records that carry no session id.
pub const UNKNOWN_SESSION: &str = "unknown_session";

/// One logged outbound call attempt.
///
/// The feed labels its columns with free-form strings (spaces, punctuation,
/// question marks included); serde renames map them onto field names and the
/// labels are never treated as identifiers. Every field tolerates absence:
/// missing or mistyped text decodes to an empty string, missing or mistyped
/// flags decode to `false`. Decoding a record never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Batch/session identifier. Not unique across records.
    #[serde(
        rename = "Caller_agent_ID",
        default,
        deserialize_with = "lenient_text"
    )]
    pub session_id: String,

    /// Nominal record identifier. Uniqueness is not enforced by the feed.
    #[serde(rename = "Call_ID", default, deserialize_with = "lenient_text")]
    pub call_id: String,

    #[serde(rename = "Saloon Name", default, deserialize_with = "lenient_text")]
    pub business_name: String,

    /// Free-form status label ("called", "in progress", "failed", ...).
    #[serde(rename = "Status", default, deserialize_with = "lenient_text")]
    pub status: String,

    /// Whether the callee expressed interest in an AI agent.
    #[serde(
        rename = "Need AI-Agent ? (Yes/No)",
        default,
        deserialize_with = "lenient_flag"
    )]
    pub ai_interest: bool,

    #[serde(
        rename = "Appointment Booked (Yes/No)",
        default,
        deserialize_with = "lenient_flag"
    )]
    pub appointment_booked: bool,

    #[serde(rename = "Call summary", default, deserialize_with = "lenient_text")]
    pub summary: String,

    #[serde(rename = "Call Transcript", default, deserialize_with = "lenient_text")]
    pub transcript: String,

    /// Recording URL; empty when the feed supplied none.
    #[serde(rename = "Call Recording", default, deserialize_with = "lenient_text")]
    pub recording_url: String,

    #[serde(rename = "Phone Number", default, deserialize_with = "lenient_text")]
    pub phone_number: String,
}

impl CallRecord {
    /// Grouping key for session rollups. Records without a session id share
    /// the reserved [`UNKNOWN_SESSION`] bucket, distinct from any real id.
    pub fn session_key(&self) -> &str {
        if self.session_id.is_empty() {
            UNKNOWN_SESSION
        } else {
            &self.session_id
        }
    }
}

/// Trailing 8 characters of an identifier, the display label used by charts.
pub fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(8);
    chars[start..].iter().collect()
}

/// Accept any JSON value where text is expected; anything but a string
/// decodes to `""`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        _ => String::new(),
    })
}

/// Accept any JSON value where a flag is expected; only a literal `true`
/// counts, everything else decodes to `false`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}
