// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! # Yeojeong services
//!
//! Three independently deployed services sharing one crate:
//! an HTTP API, a background worker and a Lambda greeting handler.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `worker`: background task loop with injectable clock
//! - `lambda`: Lambda proxy-response handler
//! - `config`: configuration management
//! - `error`: error types
//! - `shutdown`: termination signal handling
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod lambda;
mod shutdown;
mod timestamp;
mod worker;
pub mod prelude;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export commonly used types
/// Application configuration
pub use config::{Config, ServiceInfo, WorkerDelays};

/// Application error and result type
pub use error::{AppError, ErrorBody, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::{EchoResponse, HealthResponse, HelloResponse, NotFoundResponse};
pub use api::{AppState, MAX_BODY_BYTES, create_router};

/// Worker loop and its seams
pub use worker::{
    Clock, SimulatedTask, TaskProcessor, TokioClock, Worker, WorkerState, start_worker_loop,
};

/// Lambda handler
pub use lambda::{
    GreetingBody, MISSING_REQUEST_ID, ProxyResponse, build_response, function_handler,
};

/// Termination signals
pub use shutdown::{shutdown_signal, spawn_signal_listener};

/// ISO-8601 timestamps
pub use timestamp::now_iso8601;

/// Installs the global tracing subscriber
///
/// Honours `RUST_LOG`; defaults to `info` when it is unset or invalid.
pub fn setup_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
