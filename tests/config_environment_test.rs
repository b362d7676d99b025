// ABOUTME: Tests for environment-driven server and engine configuration
// ABOUTME: Mutates process environment, so every test is serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use vitals_risk_server::config::environment::{Environment, LogLevel, ServerConfig};
use vitals_risk_server::logging::LoggingConfig;
use vitals_risk_server::EngineConfig;

const SERVER_VARS: [&str; 7] = [
    "HOST",
    "HTTP_PORT",
    "LOG_LEVEL",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
    "MAX_REQUEST_BODY_BYTES",
];

const ENGINE_VARS: [&str; 5] = [
    "VITALS_TIER_MEDIUM_THRESHOLD",
    "VITALS_TIER_HIGH_THRESHOLD",
    "VITALS_LEVEL_MEDIUM_THRESHOLD",
    "VITALS_LEVEL_HIGH_THRESHOLD",
    "VITALS_RECOMMENDATION_RISK_THRESHOLD",
];

fn clear_env() {
    for var in SERVER_VARS.iter().chain(ENGINE_VARS.iter()) {
        env::remove_var(var);
    }
    env::remove_var("RUST_LOG");
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 5001);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.max_request_body_bytes, 64 * 1024);
    assert_eq!(config.engine, EngineConfig::default());
}

#[test]
#[serial]
fn test_server_config_overrides() {
    clear_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "8088");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_LEVEL", "debug");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:8088");
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.summary().contains("127.0.0.1:8088"));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_engine_threshold_overrides() {
    clear_env();
    env::set_var("VITALS_TIER_MEDIUM_THRESHOLD", "25");
    env::set_var("VITALS_TIER_HIGH_THRESHOLD", "55.5");
    env::set_var("VITALS_RECOMMENDATION_RISK_THRESHOLD", "40");

    let config = EngineConfig::load().unwrap();
    assert!((config.tier.medium_min - 25.0).abs() < f64::EPSILON);
    assert!((config.tier.high_min - 55.5).abs() < f64::EPSILON);
    assert_eq!(config.recommendation_risk_above, 40);
    assert_eq!(config.category_levels.high_above, 60);

    clear_env();
}

#[test]
#[serial]
fn test_engine_inverted_thresholds_rejected() {
    clear_env();
    env::set_var("VITALS_LEVEL_MEDIUM_THRESHOLD", "70");
    env::set_var("VITALS_LEVEL_HIGH_THRESHOLD", "40");

    assert!(EngineConfig::load().is_err());
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_engine_unparseable_override_rejected() {
    clear_env();
    env::set_var("VITALS_TIER_HIGH_THRESHOLD", "sixty");

    assert!(EngineConfig::load().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_log_level_drives_logging_filter() {
    clear_env();
    env::set_var("LOG_LEVEL", "debug");

    let server = ServerConfig::from_env().unwrap();
    let logging = LoggingConfig::from_env();
    assert_eq!(logging.level, server.log_level);
    assert_eq!(logging.level, LogLevel::Debug);

    let filter = logging.env_filter().to_string().to_lowercase();
    assert!(filter.contains("debug"), "filter was {filter}");

    clear_env();
}

#[test]
#[serial]
fn test_rust_log_overrides_log_level() {
    clear_env();
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("RUST_LOG", "error");

    let filter = LoggingConfig::from_env().env_filter().to_string().to_lowercase();
    assert!(filter.contains("error"), "filter was {filter}");
    assert!(!filter.contains("debug"), "filter was {filter}");

    clear_env();
}
