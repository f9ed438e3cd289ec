//! HTTP surface
//!
//! One page route, two API routes and a health probe. Handlers are
//! stateless per-request; shared state is the extraction engine behind
//! its trait plus the resolved settings.

pub mod handlers;

use crate::extractor::Extractor;
use crate::utils::AppSettings;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
    pub settings: Arc<AppSettings>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>, settings: AppSettings) -> Self {
        Self {
            extractor,
            settings: Arc::new(settings),
            started_at: Utc::now(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/static/style.css", get(handlers::stylesheet))
        .route("/static/app.js", get(handlers::script))
        .route("/healthz", get(handlers::health))
        .route("/api/info", post(handlers::video_info))
        .route("/api/download", get(handlers::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and run the server until the process is stopped.
pub async fn serve(settings: AppSettings, extractor: Arc<dyn Extractor>) -> anyhow::Result<()> {
    let bind_address = settings.bind_address.clone();
    let app = router(AppState::new(extractor, settings));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
