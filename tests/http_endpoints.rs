// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Yeojeong contributors

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use yeojeong_services::{AppState, MAX_BODY_BYTES, ServiceInfo, create_router};

fn make_app() -> axum::Router {
    let service = ServiceInfo {
        environment: "staging".to_string(),
        version: "3f2a9c1".to_string(),
    };
    create_router(Arc::new(AppState::new(service)))
}

async fn body_string(resp: Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn assert_iso_timestamp(value: &serde_json::Value) {
    let ts = value.as_str().expect("timestamp must be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(ts).is_ok(),
        "not an ISO-8601 timestamp: {ts}"
    );
}

// --- /health endpoint ---

#[tokio::test]
async fn health_returns_200_with_service_identity() {
    let resp = make_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let health = body_json(resp).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["environment"], "staging");
    assert_eq!(health["version"], "3f2a9c1");
    assert_iso_timestamp(&health["timestamp"]);
}

#[tokio::test]
async fn health_uses_defaults_without_configuration() {
    let app = create_router(Arc::new(AppState::default()));
    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let health = body_json(resp).await;
    assert_eq!(health["environment"], "dev");
    assert_eq!(health["version"], "unknown");
}

// --- /api/hello endpoint ---

#[tokio::test]
async fn hello_returns_greeting() {
    let resp = make_app()
        .oneshot(Request::get("/api/hello").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let hello = body_json(resp).await;
    assert_eq!(hello["message"], "Hello from Yeojeong API!");
    assert_eq!(hello["environment"], "staging");
    assert_iso_timestamp(&hello["timestamp"]);
    assert!(hello.get("version").is_none());
}

// --- /api/echo endpoint ---

#[tokio::test]
async fn echo_returns_body_under_echo_key() {
    let resp = make_app()
        .oneshot(post_json("/api/echo", r#"{"a":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let text = body_string(resp).await;
    assert!(
        text.starts_with(r#"{"echo":{"a":1},"timestamp":""#),
        "unexpected body: {text}"
    );

    let echo: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(echo["echo"], serde_json::json!({"a": 1}));
    assert_iso_timestamp(&echo["timestamp"]);
}

#[tokio::test]
async fn echo_preserves_payload_text_exactly() {
    let payloads = [
        r#"{"z":1,"a":[true,null,"x"],"m":{"n":1.50}}"#,
        r#"[1,2,3]"#,
        r#""just a string""#,
        "12345678901234567890",
        "null",
    ];

    for payload in payloads {
        let resp = make_app()
            .oneshot(post_json("/api/echo", payload))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let text = body_string(resp).await;
        let expected_prefix = format!(r#"{{"echo":{payload},"timestamp":"#);
        assert!(
            text.starts_with(&expected_prefix),
            "payload {payload} came back as {text}"
        );
    }
}

#[tokio::test]
async fn echo_without_json_content_type_echoes_empty_object() {
    let resp = make_app()
        .oneshot(
            Request::post("/api/echo")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("hello"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo = body_json(resp).await;
    assert_eq!(echo["echo"], serde_json::json!({}));
}

#[tokio::test]
async fn echo_malformed_json_returns_500_with_message() {
    let resp = make_app()
        .oneshot(post_json("/api/echo", "{\"a\":"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let err = body_json(resp).await;
    assert_eq!(err["error"], "Internal Server Error");
    assert!(!err["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn echo_oversized_body_returns_500_json() {
    let big = format!(r#"{{"blob":"{}"}}"#, "x".repeat(MAX_BODY_BYTES));
    let resp = make_app()
        .oneshot(post_json("/api/echo", &big))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {content_type}");

    let err = body_json(resp).await;
    assert_eq!(err["error"], "Internal Server Error");
    assert!(
        err["message"].as_str().unwrap().contains("length limit exceeded"),
        "unexpected message: {}",
        err["message"]
    );
}

#[tokio::test]
async fn echo_accepts_body_at_the_limit() {
    let filler = MAX_BODY_BYTES - r#"{"blob":""}"#.len();
    let body = format!(r#"{{"blob":"{}"}}"#, "x".repeat(filler));
    assert_eq!(body.len(), MAX_BODY_BYTES);

    let resp = make_app()
        .oneshot(post_json("/api/echo", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// --- path matching ---

#[tokio::test]
async fn paths_match_case_insensitively_and_ignore_trailing_slash() {
    for path in ["/health/", "/HEALTH", "/Health/", "/Api/Hello", "/api/hello/"] {
        let resp = make_app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "path {path}");
    }

    let resp = make_app()
        .oneshot(post_json("/API/Echo/", r#"{"a":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let echo = body_json(resp).await;
    assert_eq!(echo["echo"], serde_json::json!({"a": 1}));
}

#[tokio::test]
async fn canonical_path_keeps_query_string() {
    let resp = make_app()
        .oneshot(Request::get("/Health/?verbose=1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404_with_path() {
    for path in [
        "/unknown-path",
        "/api",
        "/api/hello/extra",
        "/healthz",
        "/health//",
        "/Missing/Path/",
    ] {
        let resp = make_app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
        let err = body_json(resp).await;
        assert_eq!(err["error"], "Not Found");
        assert_eq!(err["path"], path);
    }
}

#[tokio::test]
async fn not_found_path_excludes_query_string() {
    let resp = make_app()
        .oneshot(Request::get("/missing?x=1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = body_json(resp).await;
    assert_eq!(err["path"], "/missing");
}

#[tokio::test]
async fn not_found_reports_path_as_sent() {
    let resp = make_app()
        .oneshot(Request::get("/No/Such/Thing/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = body_json(resp).await;
    assert_eq!(err["path"], "/No/Such/Thing/");
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_404() {
    let resp = make_app()
        .oneshot(Request::get("/api/echo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = body_json(resp).await;
    assert_eq!(err["path"], "/api/echo");

    let resp = make_app()
        .oneshot(Request::get("/Api/Echo/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let err = body_json(resp).await;
    assert_eq!(err["path"], "/Api/Echo/");
}

// --- CORS ---

#[tokio::test]
async fn responses_allow_any_origin() {
    let resp = make_app()
        .oneshot(
            Request::get("/api/hello")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn preflight_is_answered_by_cors_layer() {
    let resp = make_app()
        .oneshot(
            Request::options("/api/echo")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let methods = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .unwrap(),
        "content-type"
    );
}
