//! Application Layer (Use Cases)
//!
//! Orchestrates the fetch -> normalize -> aggregate pipeline for the
//! HTTP routes.

mod dashboard_service;

pub use dashboard_service::DashboardService;
