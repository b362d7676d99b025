// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Request ID generation and propagation plus one span per HTTP request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers::REQUEST_ID;
use axum::body::Body;
use http::{HeaderMap, HeaderName, Request};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{Level, Span};

/// Placeholder when no id is present, which only happens outside the router
const UNKNOWN_REQUEST_ID: &str = "unknown";

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID)
}

/// Generates an `x-request-id` for requests that arrive without one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(request_id_header(), MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(request_id_header())
}

/// Read the correlation id from request headers
#[must_use]
pub fn request_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN_REQUEST_ID)
        .to_owned()
}

/// Create a tracing span for HTTP requests
#[must_use]
pub fn create_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id_from_headers(request.headers()),
    )
}

/// `TraceLayer` emitting one span per request and an info event per response
pub type RequestTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span>;

/// Build the request tracing layer
#[must_use]
pub fn request_trace_layer() -> RequestTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(create_request_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id_from_headers(&headers), "unknown");

        headers.insert(REQUEST_ID, "req-123".parse().unwrap());
        assert_eq!(request_id_from_headers(&headers), "req-123");
    }
}
