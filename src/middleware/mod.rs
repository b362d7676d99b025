// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request IDs, span creation, CORS, and the JSON error boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from `ServerConfig`
pub mod cors;
/// Body limit, timeout and panic handling with JSON error responses
pub mod error_boundary;
/// Request ids and per-request spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Failure handling
pub use error_boundary::with_error_boundary;

// Request tracing and correlation
pub use tracing::{
    create_request_span, propagate_request_id_layer, request_id_from_headers,
    request_trace_layer, set_request_id_layer,
};
