// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Process termination signals delivered as a shutdown flag

use tokio::sync::watch;

/// Waits for SIGINT (Ctrl+C) or SIGTERM and returns the signal name
pub async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    }
}

/// Spawns a listener that flips the returned flag on the first signal
pub fn spawn_signal_listener() -> watch::Receiver<bool> {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        let name = shutdown_signal().await;
        tracing::info!("{} received, shutting down gracefully...", name);
        let _ = shutdown_tx.send(true);
    });

    shutdown_rx
}
