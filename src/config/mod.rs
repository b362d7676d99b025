// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven server config; engine thresholds live in vitals-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Vitals risk server
//!
//! - **Environment**: host, port, CORS, limits, and log level from environment variables
//! - **Engine**: risk tiers and recommendation triggers, see [`vitals_intelligence::config`]

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, LogLevel, ServerConfig};
pub use vitals_intelligence::config::EngineConfig;
