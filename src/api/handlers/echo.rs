use axum::{
    Json,
    body::Bytes,
    extract::rejection::BytesRejection,
    http::{HeaderMap, header},
};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::error::Result;
use crate::timestamp::now_iso8601;

/// Echo response; `echo` is written out exactly as it was received
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub echo: Box<RawValue>,
    pub timestamp: String,
}

/// POST /api/echo
///
/// The body is only decoded when the request declares a JSON content type.
/// Anything else, and an empty body, echoes `{}`. Malformed JSON and a body
/// that cannot be read (over the size limit) are request faults, answered
/// with the 500 JSON body.
pub async fn echo(
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<EchoResponse>> {
    let body = body?;
    let echo = if is_json(&headers) && !body.trim_ascii().is_empty() {
        serde_json::from_slice::<Box<RawValue>>(&body)?
    } else {
        serde_json::value::to_raw_value(&serde_json::json!({}))?
    };

    tracing::debug!("Echoing {} byte payload", echo.get().len());

    Ok(Json(EchoResponse {
        echo,
        timestamp: now_iso8601(),
    }))
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
