use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod routes;

use adapters::HttpFeed;
use application::DashboardService;

/// Application service wired to the reqwest-backed feed adapter
pub type AppDashboardService = DashboardService<HttpFeed>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<AppDashboardService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Callboard API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Callboard API initializing...");

    // The feed endpoint is injected configuration, never a hard-coded URL.
    let feed_url = std::env::var("CALLBOARD_FEED_URL")
        .context("CALLBOARD_FEED_URL must point at the call-record feed")?;
    let bind_addr =
        std::env::var("CALLBOARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let feed = Arc::new(HttpFeed::new(&feed_url));
    let state = AppState {
        dashboard: Arc::new(DashboardService::new(feed)),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::dashboard::router())
        .merge(routes::calls::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("Callboard API ready on {bind_addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
