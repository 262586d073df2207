// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Background worker loop
//!
//! The worker repeats one iteration at a time: run a task, wait, repeat.
//! A failed iteration is logged and followed by the retry delay; it is
//! never escalated and never counted against a budget.
//!
//! Cancellation is cooperative. The shutdown flag is read only at the top
//! of the loop, so an iteration that has started always runs to the end,
//! delays included.

mod clock;
mod task;

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::{ServiceInfo, WorkerDelays};
use crate::error::Result;
use crate::timestamp::now_iso8601;

pub use clock::{Clock, TokioClock};
pub use task::{SimulatedTask, TaskProcessor};

/// Lifecycle of the worker loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Stopping,
}

impl WorkerState {
    /// Reads the current state from the shutdown flag
    fn observe(shutdown_rx: &watch::Receiver<bool>) -> Self {
        if *shutdown_rx.borrow() {
            WorkerState::Stopping
        } else {
            WorkerState::Running
        }
    }
}

/// Sequential task loop with fixed delays
pub struct Worker {
    clock: Arc<dyn Clock>,
    processor: Arc<dyn TaskProcessor>,
    delays: WorkerDelays,
}

impl Worker {
    pub fn new(
        clock: Arc<dyn Clock>,
        processor: Arc<dyn TaskProcessor>,
        delays: WorkerDelays,
    ) -> Self {
        Self {
            clock,
            processor,
            delays,
        }
    }

    /// Worker running [`SimulatedTask`]s on the tokio timer
    pub fn simulated(delays: WorkerDelays) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(TokioClock);
        let processor = Arc::new(SimulatedTask::new(clock.clone(), delays.task));
        Self::new(clock, processor, delays)
    }

    /// Runs iterations until the shutdown flag is observed
    ///
    /// Returns the number of tasks started.
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> u64 {
        let mut task_count: u64 = 0;

        while WorkerState::observe(&shutdown_rx) == WorkerState::Running {
            task_count += 1;
            if let Err(e) = self.iteration(task_count).await {
                tracing::error!("Error processing task #{}: {}", task_count, e);
                tracing::debug!("Retrying in {:?}", self.delays.retry);
                self.clock.sleep(self.delays.retry).await;
            }
        }

        tracing::info!("Worker stopped gracefully after {} task(s)", task_count);
        task_count
    }

    async fn iteration(&self, task_number: u64) -> Result<()> {
        tracing::info!("Processing task #{} at {}", task_number, now_iso8601());
        self.processor.process(task_number).await?;
        tracing::info!("Task #{} completed", task_number);

        self.clock.sleep(self.delays.idle).await;
        Ok(())
    }
}

/// Starts the worker loop in the background
///
/// The returned handle resolves to the number of tasks started once the
/// shutdown flag has been observed.
pub fn start_worker_loop(
    shutdown_rx: watch::Receiver<bool>,
    service: &ServiceInfo,
    worker: Worker,
) -> JoinHandle<u64> {
    tracing::info!("Worker started");
    tracing::info!("Environment: {}", service.environment);
    tracing::info!("Version: {}", service.version);
    tracing::debug!(
        "Delays: task {:?}, idle {:?}, retry {:?}",
        worker.delays.task,
        worker.delays.idle,
        worker.delays.retry
    );

    tokio::spawn(async move { worker.run(shutdown_rx).await })
}
