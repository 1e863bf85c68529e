//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Query, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{RecolorService, Storage, TemplateService};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Palettize API",
        description = "Recolor images onto a small palette by luminance",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_palettes, api::handle_recolor),
    components(schemas(api::PaletteInfo, api::PaletteListResponse)),
    tags(
        (name = "Palettes", description = "Available palettes"),
        (name = "Recolor", description = "Image recoloring")
    )
)]
pub struct ApiDoc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub recolor: Arc<RecolorService>,
    pub templates: Arc<TemplateService>,
}

/// Create application state from configuration and storage locations.
///
/// Creates the storage directories if they are missing.
pub fn create_app_state(config: AppConfig, storage: Storage) -> anyhow::Result<AppState> {
    storage.ensure_dirs().map_err(|e| {
        anyhow::anyhow!(
            "Failed to create storage directories under {} and {}: {e}",
            storage.upload_dir().display(),
            storage.processed_dir().display()
        )
    })?;

    let registry = Arc::new(config.build_registry());
    tracing::info!(
        palettes = registry.len(),
        default = %registry.default_palette().name(),
        "Palette registry ready"
    );

    let recolor = Arc::new(RecolorService::new(registry, storage));
    let templates = Arc::new(TemplateService::new()?);

    Ok(AppState {
        config: Arc::new(config),
        recolor,
        templates,
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let processed_dir = state.recolor.storage().processed_dir().to_path_buf();
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Browser upload flow
        .route("/", get(handle_index).post(handle_upload))
        .nest_service("/processed", ServeDir::new(processed_dir))
        // JSON / binary API
        .route("/api/palettes", get(handle_palettes))
        .route("/api/recolor", post(handle_recolor))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state, limits and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, api::PageError> {
    api::handle_index(State(state.recolor), State(state.templates)).await
}

async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, api::PageError> {
    api::handle_upload(State(state.recolor), State(state.templates), multipart).await
}

async fn handle_palettes(State(state): State<AppState>) -> Json<api::PaletteListResponse> {
    api::handle_palettes(State(state.recolor)).await
}

async fn handle_recolor(
    State(state): State<AppState>,
    query: Query<api::RecolorQuery>,
    body: axum::body::Bytes,
) -> Result<axum::response::Response, ApiError> {
    api::handle_recolor(State(state.recolor), query, body).await
}
