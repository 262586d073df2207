// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Error types shared by the API, worker and Lambda services

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Request payload could not be decoded
    #[error("{0}")]
    Payload(#[from] serde_json::Error),

    /// Request body could not be read (too large, aborted, ...)
    #[error("{0}")]
    Body(#[from] BytesRejection),

    /// Worker iteration fault
    #[error("Task error: {0}")]
    Task(String),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned for any unhandled request fault
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub const INTERNAL: &'static str = "Internal Server Error";

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: Self::INTERNAL.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::internal(self.to_string())),
        )
            .into_response()
    }
}
