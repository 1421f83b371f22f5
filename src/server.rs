//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api::{self, TransformRequest};
use crate::assets::{self, AssetLoader};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::RenderService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub renderer: Arc<RenderService>,
    pub assets: Arc<AssetLoader>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    create_app_state_with_config(asset_loader, config)
}

/// Create application state with an explicit configuration.
pub fn create_app_state_with_config(
    asset_loader: Arc<AssetLoader>,
    config: AppConfig,
) -> anyhow::Result<AppState> {
    config
        .render
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid render configuration: {e}"))?;

    let renderer = Arc::new(RenderService::from_config(&config));

    Ok(AppState {
        config: Arc::new(config),
        renderer,
        assets: asset_loader,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests. Paths not
/// matched by an endpoint fall through to the static drawing site.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_bytes;
    let static_dir = state.assets.static_dir().map(|p| p.to_path_buf());

    let router = Router::new()
        .route("/transform", post(handle_transform))
        // Health check
        .route("/health", get(|| async { "OK" }));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(assets::serve_embedded),
    };

    router
        .layer(DefaultBodyLimit::max(body_limit))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handler to extract state components for the underlying API handler

async fn handle_transform(
    State(state): State<AppState>,
    payload: Result<Json<TransformRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    api::handle_transform(State(state.config), State(state.renderer), payload).await
}
