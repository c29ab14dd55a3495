//! Callboard API Routes
//!
//! - /dashboard - complete dashboard view
//! - /dashboard/stats - stat cards
//! - /dashboard/charts - chart datasets
//! - /calls - searchable/filterable table view
//! - /calls/:call_id - per-call detail

pub mod calls;
pub mod dashboard;
pub mod swagger;
