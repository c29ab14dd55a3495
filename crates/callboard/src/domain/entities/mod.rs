//! Domain Entities
//!
//! - CallRecord: one logged outbound call attempt from the feed

mod call_record;

pub use call_record::*;
