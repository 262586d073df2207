// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

mod echo;
mod health;
mod hello;
mod not_found;

pub use echo::{EchoResponse, echo};
pub use health::{HealthResponse, health_check};
pub use hello::{HelloResponse, hello};
pub use not_found::{NotFoundResponse, not_found};
