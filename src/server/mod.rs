//! HTTP surface: the enquiry endpoint and the sitemap endpoints.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::enquiry::Dispatcher;
use crate::transport::DirectoryStore;

/// Shared state handed to every handler. Collaborators are injected once at
/// startup; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub dispatcher: Arc<Dispatcher>,
    pub store: Arc<dyn DirectoryStore>,
}

/// Build the API router. Unmatched methods on a matched path answer 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/send-email", post(handlers::send_email))
        .route("/api/sitemap-directory", get(handlers::sitemap_directory))
        // One deployment serves the directory sitemap at the conventional path.
        .route("/api/sitemap.xml", get(handlers::sitemap_directory))
        .route("/api/sitemap-pages", get(handlers::sitemap_pages))
        .route("/api/sitemap-index", get(handlers::sitemap_index))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
