//! Dashboard Routes - aggregated stats and chart datasets
//!
//! HTTP handlers that delegate to DashboardService for the pipeline.

use axum::{extract::State, routing::get, Json, Router};

use callboard::services::view::{DashboardCharts, DashboardView, StatCard};
use callboard::DomainError;

use crate::AppState;

/// Map a pipeline error onto an HTTP response. Every pipeline failure is an
/// upstream-feed problem, so the record set the client holds should reset
/// to empty.
pub(crate) fn error_response(err: DomainError) -> (axum::http::StatusCode, String) {
    (
        axum::http::StatusCode::BAD_GATEWAY,
        format!("Error loading data: {err}"),
    )
}

/// Get the complete dashboard view
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Complete dashboard view", body = DashboardView),
        (status = 502, description = "Upstream feed failure")
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, (axum::http::StatusCode, String)> {
    let view = state.dashboard.dashboard().await.map_err(error_response)?;
    Ok(Json(view))
}

/// Get the stat cards
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    responses(
        (status = 200, description = "Stat cards", body = Vec<StatCard>),
        (status = 502, description = "Upstream feed failure")
    ),
    tag = "Dashboard"
)]
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatCard>>, (axum::http::StatusCode, String)> {
    let cards = state.dashboard.stats().await.map_err(error_response)?;
    Ok(Json(cards))
}

/// Get the four chart datasets
#[utoipa::path(
    get,
    path = "/dashboard/charts",
    responses(
        (status = 200, description = "Chart datasets", body = DashboardCharts),
        (status = 502, description = "Upstream feed failure")
    ),
    tag = "Dashboard"
)]
pub async fn get_charts(
    State(state): State<AppState>,
) -> Result<Json<DashboardCharts>, (axum::http::StatusCode, String)> {
    let charts = state.dashboard.charts().await.map_err(error_response)?;
    Ok(Json(charts))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stats", get(get_stats))
        .route("/dashboard/charts", get(get_charts))
}
