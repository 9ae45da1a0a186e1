//! Health and server info routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/server-info", get(get_server_info))
}

/// GET /api/health
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let uptime = chrono::Utc::now() - state.started_at;

    Json(serde_json::json!({
        "status": "healthy",
        "service": "relgraph",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSeconds": uptime.num_seconds(),
    }))
}

/// GET /api/server-info — effective configuration and platform.
async fn get_server_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = &state.config;

    Json(serde_json::json!({
        "port": config.port,
        "maxRelationships": config.max_relationships,
        "centralNodes": config.central_nodes,
        "includeDescriptions": config.include_descriptions,
        "platform": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
    }))
}
