//! Graph analysis routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use super::ApiError;
use crate::request::{AnalyzeRequest, AnalyzeResponse};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/graph/analyze", post(analyze_graph))
        .route("/graph/report", post(graph_report))
}

/// POST /api/graph/analyze — structured analysis plus report lines.
async fn analyze_graph(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(req) = body?;
    Ok(Json(req.run(&state.config)?))
}

/// POST /api/graph/report — report lines only.
async fn graph_report(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(req) = body?;
    let response = req.run(&state.config)?;
    Ok(Json(serde_json::json!({ "report": response.report })))
}
