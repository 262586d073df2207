use axum::{Json, extract::OriginalUri, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
}

/// Fallback for unknown paths and unsupported methods
///
/// `path` is the path exactly as the client sent it, without the query
/// string; routing itself sees a canonicalized copy.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Not Found".to_string(),
            path: uri.path().to_string(),
        }),
    )
}
