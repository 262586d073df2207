// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Unit of work executed once per loop iteration

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::clock::Clock;
use crate::error::Result;

/// Work performed by one worker iteration
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    /// Processes task number `task_number` (1-based)
    async fn process(&self, task_number: u64) -> Result<()>;
}

/// Placeholder task: waits for a fixed time and succeeds
pub struct SimulatedTask {
    clock: Arc<dyn Clock>,
    duration: Duration,
}

impl SimulatedTask {
    pub fn new(clock: Arc<dyn Clock>, duration: Duration) -> Self {
        Self { clock, duration }
    }
}

#[async_trait]
impl TaskProcessor for SimulatedTask {
    async fn process(&self, task_number: u64) -> Result<()> {
        tracing::trace!("Task #{} simulating {:?} of work", task_number, self.duration);
        self.clock.sleep(self.duration).await;
        Ok(())
    }
}
