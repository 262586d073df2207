// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

use std::sync::Arc;

use yeojeong_services::{
    AppState, Config, Result, create_router, setup_tracing, spawn_signal_listener,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_tracing();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let state = Arc::new(AppState::new(config.service.clone()));
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address {}: {}", addr, e);
        e
    })?;

    tracing::info!("API server running on port {}", config.port);
    tracing::info!("Environment: {}", config.service.environment);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /health    - Health check");
    tracing::info!("  - GET  /api/hello - Greeting");
    tracing::info!("  - POST /api/echo  - Echo JSON body");

    let mut shutdown_rx = spawn_signal_listener();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}
