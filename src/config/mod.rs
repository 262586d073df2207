// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Configuration module for the Yeojeong services
//!
//! Loads configuration from environment variables. All three binaries share
//! the same [`Config`]; each reads only the parts it needs.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const ENVIRONMENT: &str = "dev";
    pub const VERSION: &str = "unknown";
    pub const TASK_DELAY_MS: u64 = 5_000;
    pub const IDLE_DELAY_MS: u64 = 10_000;
    pub const RETRY_DELAY_MS: u64 = 30_000;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    pub const GIT_COMMIT: &str = "GIT_COMMIT";
    pub const WORKER_TASK_DELAY_MS: &str = "WORKER_TASK_DELAY_MS";
    pub const WORKER_IDLE_DELAY_MS: &str = "WORKER_IDLE_DELAY_MS";
    pub const WORKER_RETRY_DELAY_MS: &str = "WORKER_RETRY_DELAY_MS";
}

/// Deployment identity reported by every service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Environment tag (`dev`, `staging`, `prod`, ...)
    pub environment: String,
    /// Version string, sourced from the deployed git commit
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            environment: defaults::ENVIRONMENT.to_string(),
            version: defaults::VERSION.to_string(),
        }
    }
}

/// Fixed delays of the worker loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerDelays {
    /// Simulated work per task
    pub task: Duration,
    /// Pause between two tasks
    pub idle: Duration,
    /// Pause after a failed iteration
    pub retry: Duration,
}

impl Default for WorkerDelays {
    fn default() -> Self {
        Self {
            task: Duration::from_millis(defaults::TASK_DELAY_MS),
            idle: Duration::from_millis(defaults::IDLE_DELAY_MS),
            retry: Duration::from_millis(defaults::RETRY_DELAY_MS),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub service: ServiceInfo,
    pub worker: WorkerDelays,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            service: ServiceInfo::default(),
            worker: WorkerDelays::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// A `.env` file in the working directory is honoured when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable source
    ///
    /// Unset or empty variables fall back to their defaults; values that are
    /// set but unparseable are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match get(env_vars::PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid {} '{}': {}", env_vars::PORT, raw, e))
            })?,
            None => defaults::PORT,
        };

        let service = ServiceInfo {
            environment: get(env_vars::ENVIRONMENT)
                .unwrap_or_else(|| defaults::ENVIRONMENT.to_string()),
            version: get(env_vars::GIT_COMMIT).unwrap_or_else(|| defaults::VERSION.to_string()),
        };

        let worker = WorkerDelays {
            task: parse_delay(
                env_vars::WORKER_TASK_DELAY_MS,
                get(env_vars::WORKER_TASK_DELAY_MS),
                defaults::TASK_DELAY_MS,
            )?,
            idle: parse_delay(
                env_vars::WORKER_IDLE_DELAY_MS,
                get(env_vars::WORKER_IDLE_DELAY_MS),
                defaults::IDLE_DELAY_MS,
            )?,
            retry: parse_delay(
                env_vars::WORKER_RETRY_DELAY_MS,
                get(env_vars::WORKER_RETRY_DELAY_MS),
                defaults::RETRY_DELAY_MS,
            )?,
        };

        Ok(Config {
            port,
            service,
            worker,
        })
    }

    /// Address the API listens on: all interfaces, configured port
    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_delay(name: &str, raw: Option<String>, default_ms: u64) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(default_ms));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", name, raw, e)))
}
