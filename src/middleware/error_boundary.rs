// ABOUTME: Error boundary middleware turning timeouts and panics into JSON error envelopes
// ABOUTME: Applies the request body limit, the per-request timeout, and a panic catcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Router};
use std::any::Any;
use std::time::Duration;
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

/// Wrap `router` so that every failure leaving it is an [`AppError`] response.
///
/// Oversized bodies surface as extractor rejections inside the handlers, a
/// request running past `timeout` becomes `REQUEST_TIMEOUT` / 408, and a
/// panicking handler becomes `INTERNAL_ERROR` / 500.
pub fn with_error_boundary(router: Router, timeout: Duration, max_body_bytes: usize) -> Router {
    router
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(timeout),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::timeout("Request did not complete within the configured timeout")
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    error!(panic.message = %detail, "Request handler panicked");

    AppError::internal("Request handler failed unexpectedly").into_response()
}
