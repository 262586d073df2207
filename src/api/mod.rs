// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! HTTP API module
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /api/hello` — greeting
//! - `POST /api/echo` — echoes the JSON body back
//!
//! Paths match case-insensitively and a single trailing slash is ignored,
//! so `/HEALTH` and `/api/hello/` reach their handlers. Every other path,
//! and every method mismatch on a known path, answers 404 with the path as
//! the client sent it. Handler panics become a 500 JSON body.

pub mod handlers;
mod state;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, OriginalUri, Request},
    http::{Method, StatusCode, Uri, uri::PathAndQuery},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, Any as AnyOrigin, CorsLayer};

use crate::error::ErrorBody;

pub use state::AppState;

/// Largest accepted request body (100 KiB)
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/hello", get(handlers::hello))
        .route("/api/echo", post(handlers::echo))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer())
        .with_state(state);

    // Layers on `routes` run after route matching; the path has to be
    // rewritten before it, so the rewrite wraps the whole inner router.
    Router::new().fallback_service(routes.map_request(canonicalize_path))
}

/// Lowercases the path and drops one trailing slash before routing
///
/// The client's URI is kept as [`OriginalUri`] for the 404 body. The query
/// string is left untouched.
fn canonicalize_path(mut req: Request) -> Request {
    if req.extensions().get::<OriginalUri>().is_none() {
        let original = OriginalUri(req.uri().clone());
        req.extensions_mut().insert(original);
    }

    if let Some(uri) = canonical_uri(req.uri()) {
        *req.uri_mut() = uri;
    }
    req
}

fn canonical_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let canonical = trimmed.to_ascii_lowercase();
    if canonical == path {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{canonical}?{query}"),
        None => canonical,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// Permissive cross-origin policy: any origin, common methods, mirrored headers
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };
    tracing::error!("Error: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::internal(message)),
    )
        .into_response()
}
