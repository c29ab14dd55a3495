//! Callboard Domain Library
//!
//! Core types and logic for the Callboard outbound-call analytics dashboard.
//!
//! # Architecture
//!
//! The crate is a pure pipeline over an in-memory record list:
//!
//! - **Domain Layer** (`domain/`): entities, value objects, errors
//!   - `entities/`: the `CallRecord` feed entity
//!   - `value_objects/`: derived classifications (Outcome, EngagementLevel, StatusTone)
//!   - `errors/`: pipeline error taxonomy
//!
//! - **Ports** (`ports/`): abstract interfaces (traits)
//!   - `RecordSource`: where the raw feed payload comes from
//!
//! - **Services** (`services/`): the pipeline stages
//!   - `normalize`: raw payload -> well-formed record list
//!   - `filter`: search and status predicates for the table
//!   - `analytics`: counters, partitions and rollups
//!   - `view`: display-ready view models
//!
//! # Usage
//!
//! ```rust,ignore
//! use callboard::services::{normalize, view};
//!
//! let records = normalize::extract_records(&payload);
//! let dashboard = view::dashboard(&records, chrono::Utc::now());
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{CallRecord, DomainError, EngagementLevel, Outcome, PayloadError, StatusTone};
pub use ports::RecordSource;
