// ABOUTME: Main library entry point for the Vitals health risk API
// ABOUTME: HTTP transport, configuration, and logging around the vitals-intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Risk Server
//!
//! A small HTTP service that scores one day of biometric readings for a
//! mobile wellness client. The scoring itself lives in
//! [`vitals_intelligence`]; this crate adds the axum transport, environment
//! configuration, structured logging, and the binaries.
//!
//! ## Endpoints
//!
//! - `POST /predict` validates the seven input fields and returns a
//!   [`Prediction`](vitals_core::models::Prediction)
//! - `GET /health` and `GET /ready` for probes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitals_risk_server::config::environment::ServerConfig;
//! use vitals_risk_server::server::VitalsServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     VitalsServer::new(config).run().await
//! }
//! ```

/// Configuration management and persistence
pub mod config;

/// Application constants and default values
pub mod constants;

/// Unified error handling re-exported from `vitals-core`
pub mod errors;

/// Production logging with structured output
pub mod logging;

/// HTTP middleware for CORS and request tracing
pub mod middleware;

/// `HTTP` route handlers organized by domain
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

/// Risk engine re-exported for binaries and tests
pub use vitals_intelligence::{EngineConfig, RiskEngine};
