// ABOUTME: Server-side constants: environment defaults, header names, and endpoint paths
// ABOUTME: Domain constants (field names, input defaults) are re-exported from vitals-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use vitals_core::constants::{defaults, domains, fields, service_names};

/// Environment-driven server defaults
pub mod server_defaults {
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// HTTP port
    pub const HTTP_PORT: u16 = 5001;
    /// Allowed CORS origins, `*` means any
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Maximum accepted request body
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Header names
pub mod headers {
    /// Correlation id set on every request and echoed on every response
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Route paths
pub mod paths {
    /// Prediction endpoint
    pub const PREDICT: &str = "/predict";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}
