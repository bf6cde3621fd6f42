use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    routing::get,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use site_core::api::{HEALTH_PATH, SITE_CONTENT_PATH};
use site_core::{ContentPatch, SiteContent, ValidationError};
use site_storage::Storage;

use crate::auth::AdminGate;
use crate::error::ApiError;

pub struct SiteServer {
    pub storage: Storage,
    pub gate: Arc<dyn AdminGate>,
}

type AppState = Arc<SiteServer>;

impl SiteServer {
    pub fn new(storage: Storage, gate: Arc<dyn AdminGate>) -> Self {
        Self { storage, gate }
    }

    pub fn router(self) -> Router {
        // The public pages may be served from a different origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route(HEALTH_PATH, get(handle_info))
            .route(
                SITE_CONTENT_PATH,
                get(get_site_content).patch(update_site_content),
            )
            .layer(cors)
            .with_state(Arc::new(self))
    }

    pub async fn serve(self, host: &str, port: u16) -> anyhow::Result<()> {
        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_on(self, listener: TcpListener) -> anyhow::Result<()> {
        info!("Site server listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// GET /health - server info
async fn handle_info() -> Json<Value> {
    Json(serde_json::json!({
        "name": "leons-site",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/site-content - the content row, created on first access
async fn get_site_content(State(state): State<AppState>) -> Result<Json<SiteContent>, ApiError> {
    let content = state.storage.get_content().await?;
    Ok(Json(content))
}

/// PATCH /api/site-content - apply a partial update (administrators only)
async fn update_site_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SiteContent>, ApiError> {
    if !state.gate.is_admin(&headers) {
        warn!("Rejected unauthenticated content update");
        return Err(ApiError::Unauthorized);
    }

    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| ValidationError::new(format!("Malformed JSON: {}", e)))?;
    let patch = ContentPatch::from_json(value)?;

    let content = state.storage.update_content(&patch).await?;
    info!(fields = ?patch.field_names(), "Site content updated");
    Ok(Json(content))
}
