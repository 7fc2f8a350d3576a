//! Axum API server.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::learning::ContentPipeline;

/// Shared state for all handlers.
pub struct AppState {
    /// Cache-backed generation pipeline.
    pub pipeline: Arc<ContentPipeline>,
    /// Directory holding the landing page template.
    pub templates_dir: PathBuf,
}

impl AppState {
    pub fn new(pipeline: Arc<ContentPipeline>, templates_dir: PathBuf) -> Self {
        Self {
            pipeline,
            templates_dir,
        }
    }
}

/// Build the router. Files under `static_dir`, when given, are served at `/static`.
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let shared_state = Arc::new(state);

    let router = Router::new()
        .route("/", get(super::routes::home::index))
        .route(
            "/generate-content",
            post(super::routes::content::generate_content),
        )
        .route("/generate-quiz", post(super::routes::quiz::generate_quiz))
        .route("/health", get(super::routes::health::get_health));

    let router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router
        // Body size limit: 1 MiB.
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = build_router(state, Some(config.static_dir.clone()));
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Tutorly API server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
