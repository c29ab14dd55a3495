//! Domain Errors
//!
//! Error taxonomy for the dashboard pipeline.

use thiserror::Error;

/// Errors surfaced by the fetch-and-aggregate pipeline.
///
/// On any error the caller resets its record set to empty, so aggregation
/// never runs on stale or partial data.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Network-level failure reaching the feed.
    #[error("Feed request failed: {0}")]
    Fetch(String),

    /// The feed answered with a non-success HTTP status.
    #[error("Feed returned HTTP status {status}")]
    UpstreamStatus { status: u16 },

    /// Strict-mode payload validation failure.
    #[error("Malformed feed payload: {0}")]
    Payload(#[from] PayloadError),
}

/// Shape violations reported by strict payload extraction.
///
/// Lenient extraction never raises these; it degrades to an empty record
/// list instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("expected an array or an object wrapping one, found {found}")]
    UnsupportedShape { found: &'static str },

    #[error("object payload has no array under the {key:?} key")]
    MissingCollection { key: &'static str },

    #[error("record at index {index} is {found}, not an object")]
    NotAnObject { index: usize, found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_names_the_code() {
        let err = DomainError::UpstreamStatus { status: 500 };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_payload_error_converts_into_domain_error() {
        let err: DomainError = PayloadError::UnsupportedShape { found: "a string" }.into();
        assert!(err.to_string().contains("Malformed feed payload"));
    }
}
