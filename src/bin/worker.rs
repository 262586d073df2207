// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

use std::process::ExitCode;

use yeojeong_services::{Config, Worker, setup_tracing, spawn_signal_listener, start_worker_loop};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let shutdown_rx = spawn_signal_listener();
    let handle = start_worker_loop(
        shutdown_rx,
        &config.service,
        Worker::simulated(config.worker),
    );

    match handle.await {
        Ok(task_count) => {
            tracing::info!("Worker exited after {} task(s)", task_count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
