// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

//! Lambda greeting handler
//!
//! Answers every invocation with an API Gateway proxy response: status 200,
//! permissive CORS headers and a JSON body string with a greeting.

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::timestamp::now_iso8601;

pub const GREETING: &str = "Hello from Yeojeong Lambda!";

/// Reported when the event carries no `requestContext.requestId`
pub const MISSING_REQUEST_ID: &str = "N/A";

/// Headers attached to every response
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
];

/// API Gateway proxy response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded [`GreetingBody`]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GreetingBody {
    pub message: String,
    pub timestamp: String,
    /// Usually a string; any other truthy JSON value is passed through
    pub request_id: Value,
    pub environment: String,
}

/// Extracts `requestContext.requestId`, falling back to [`MISSING_REQUEST_ID`]
///
/// Falsy ids (`null`, `false`, `0`, `""`) count as absent; every other
/// value is returned unchanged, whatever its JSON type.
#[must_use]
pub fn request_id(event: &Value) -> Value {
    event
        .get("requestContext")
        .and_then(|ctx| ctx.get("requestId"))
        .filter(|id| is_truthy(id))
        .cloned()
        .unwrap_or_else(|| Value::String(MISSING_REQUEST_ID.to_string()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Builds the greeting response for one event
pub fn build_response(event: &Value, environment: &str) -> Result<ProxyResponse, Error> {
    let body = GreetingBody {
        message: GREETING.to_string(),
        timestamp: now_iso8601(),
        request_id: request_id(event),
        environment: environment.to_string(),
    };

    Ok(ProxyResponse {
        status_code: 200,
        headers: RESPONSE_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        body: serde_json::to_string(&body)?,
    })
}

/// Lambda entry point
///
/// `environment` is resolved once at cold start and shared by all
/// invocations of the container.
#[tracing::instrument(level = "info", skip(event, environment), fields(aws_request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    environment: &str,
) -> Result<ProxyResponse, Error> {
    tracing::info!(
        "Event received: {}",
        serde_json::to_string_pretty(&event.payload)?
    );

    let response = build_response(&event.payload, environment)?;

    tracing::info!("Response: {}", serde_json::to_string_pretty(&response)?);
    Ok(response)
}
