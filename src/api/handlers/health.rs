use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::timestamp::now_iso8601;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
}

/// GET /health
///
/// Always healthy while the process is serving requests.
/// Reports the environment tag and the deployed version.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_iso8601(),
        environment: state.service.environment.clone(),
        version: state.service.version.clone(),
    };

    (StatusCode::OK, Json(response))
}
