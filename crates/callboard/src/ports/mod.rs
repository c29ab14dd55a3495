//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the pipeline reaches external
//! systems. Implementations live with the binaries (server, CLI).

pub mod record_source;

// Re-exports
pub use record_source::*;
