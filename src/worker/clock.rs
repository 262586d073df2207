// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Timer seam for the worker loop
//!
//! Every suspension of the worker goes through a [`Clock`], so tests can
//! swap real delays for instant ones.

use async_trait::async_trait;
use std::time::Duration;

/// Source of timed suspensions
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspends the caller for `duration`; not cancellable once started
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
