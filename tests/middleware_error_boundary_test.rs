// ABOUTME: Integration tests for the error boundary wrapped around every route
// ABOUTME: Timeouts, panics, and body-limit rejections must all produce the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;
use std::time::Duration;
use vitals_risk_server::middleware::with_error_boundary;

const SHORT_TIMEOUT: Duration = Duration::from_millis(50);
const SMALL_BODY_LIMIT: usize = 16;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "finished"
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

async fn echo_length(body: Bytes) -> String {
    body.len().to_string()
}

fn guarded_router() -> Router {
    let routes = Router::new()
        .route("/slow", get(slow_handler))
        .route("/explode", get(exploding_handler))
        .route("/echo", post(echo_length));

    with_error_boundary(routes, SHORT_TIMEOUT, SMALL_BODY_LIMIT)
}

#[tokio::test]
async fn test_timeout_returns_envelope() {
    let body: Value = AxumTestRequest::get("/slow")
        .send(guarded_router())
        .await
        .assert_status(StatusCode::REQUEST_TIMEOUT)
        .json();

    assert_eq!(body["error"]["code"], "REQUEST_TIMEOUT");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_panic_returns_internal_error_envelope() {
    let body: Value = AxumTestRequest::get("/explode")
        .send(guarded_router())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .json();

    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    // panic payloads are logged, never sent to the client
    let message = body["error"]["message"].as_str().unwrap();
    assert!(!message.contains("exploded"));
}

#[tokio::test]
async fn test_body_within_limit_passes() {
    let text = AxumTestRequest::post("/echo")
        .raw_body("tiny")
        .send(guarded_router())
        .await
        .assert_status(StatusCode::OK)
        .text();

    assert_eq!(text, "4");
}
