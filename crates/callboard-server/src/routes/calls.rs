//! Call Table Routes - searchable table and per-call detail

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use callboard::services::filter::STATUS_ALL;
use callboard::services::view::{CallDetail, CallTable};

use super::dashboard::error_response;
use crate::AppState;

/// Query parameters for the call table.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CallsQuery {
    /// Free-text search over business name, phone number and call id.
    pub search: Option<String>,
    /// Exact status to keep; the "all" sentinel keeps everything.
    pub status: Option<String>,
}

/// List call records, filtered
#[utoipa::path(
    get,
    path = "/calls",
    params(CallsQuery),
    responses(
        (status = 200, description = "Filtered call table", body = CallTable),
        (status = 502, description = "Upstream feed failure")
    ),
    tag = "Calls"
)]
pub async fn list_calls(
    State(state): State<AppState>,
    Query(query): Query<CallsQuery>,
) -> Result<Json<CallTable>, (axum::http::StatusCode, String)> {
    let search = query.search.unwrap_or_default();
    let status = query.status.unwrap_or_else(|| STATUS_ALL.to_string());

    let table = state
        .dashboard
        .calls(&search, &status)
        .await
        .map_err(error_response)?;

    Ok(Json(table))
}

/// Get detail for one call
#[utoipa::path(
    get,
    path = "/calls/{call_id}",
    params(
        ("call_id" = String, Path, description = "Call ID")
    ),
    responses(
        (status = 200, description = "Call detail", body = CallDetail),
        (status = 404, description = "Call not found"),
        (status = 502, description = "Upstream feed failure")
    ),
    tag = "Calls"
)]
pub async fn get_call(
    State(state): State<AppState>,
    Path(call_id): Path<String>,
) -> Result<Json<CallDetail>, (axum::http::StatusCode, String)> {
    let detail = state
        .dashboard
        .call_detail(&call_id)
        .await
        .map_err(error_response)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Call not found".to_string(),
        ))?;

    Ok(Json(detail))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calls", get(list_calls))
        .route("/calls/:call_id", get(get_call))
}
