use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::timestamp::now_iso8601;

pub const GREETING: &str = "Hello from Yeojeong API!";

#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}

/// GET /api/hello
pub async fn hello(State(state): State<Arc<AppState>>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: GREETING.to_string(),
        timestamp: now_iso8601(),
        environment: state.service.environment.clone(),
    })
}
