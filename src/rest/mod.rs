//! REST API for campdeck campaign management.
//!
//! Provides HTTP endpoints for campaign CRUD and the derived workflow view
//! consumed by external dashboards. Runs via `campdeck serve`.

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use state::ApiState;

/// Build the API router with all routes
pub fn build_router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/api/v1/health", get(routes::health::health))
        .route("/api/v1/status", get(routes::health::status))
        // Campaign endpoints
        .route("/api/v1/campaigns", get(routes::campaigns::list))
        .route("/api/v1/campaigns", post(routes::campaigns::create))
        .route("/api/v1/campaigns/:id", get(routes::campaigns::get_one))
        .route("/api/v1/campaigns/:id", delete(routes::campaigns::delete))
        .route(
            "/api/v1/campaigns/:id/status",
            put(routes::campaigns::set_status),
        )
        // Workflow endpoints
        .route(
            "/api/v1/campaigns/:id/workflow",
            get(routes::workflow::workflow),
        )
        // OpenAPI document
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server
pub async fn serve(state: ApiState, port: u16) -> Result<()> {
    let app = build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("REST API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_build_router() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();
        let state = ApiState::new(config);
        let _router = build_router(state);
        // Router builds without panicking
    }
}
