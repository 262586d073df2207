// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Prelude module for convenient imports
//!
//! ```rust
//! use yeojeong_services::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, ServiceInfo, WorkerDelays};
pub use crate::error::{AppError, Result};

// Services
pub use crate::api::{AppState, create_router};
pub use crate::lambda::{ProxyResponse, function_handler};
pub use crate::worker::{Clock, TaskProcessor, Worker, start_worker_loop};
