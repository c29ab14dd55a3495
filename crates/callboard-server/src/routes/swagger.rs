//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use callboard::services::analytics::{EngagementRollup, SessionRollup};
use callboard::services::view::{
    CallDetail, CallRow, CallTable, DashboardCharts, DashboardView, OutcomeSlice, ScatterPoint,
    StatCard,
};
use callboard::{EngagementLevel, StatusTone};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dashboard endpoints
        super::dashboard::get_dashboard,
        super::dashboard::get_stats,
        super::dashboard::get_charts,
        // Call endpoints
        super::calls::list_calls,
        super::calls::get_call,
    ),
    info(
        title = "Callboard API",
        version = "0.1.0",
        description = "Outbound call analytics: summary stats, chart datasets and a searchable call table derived from the upstream call-record feed.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dashboard", description = "Aggregated stats and chart datasets"),
        (name = "Calls", description = "Searchable call table and per-call detail"),
    ),
    components(
        schemas(
            // Dashboard
            DashboardView,
            DashboardCharts,
            StatCard,
            OutcomeSlice,
            ScatterPoint,
            SessionRollup,
            EngagementRollup,
            EngagementLevel,
            // Calls
            CallTable,
            CallRow,
            CallDetail,
            StatusTone,
        )
    ),
)]
pub struct ApiDoc;
