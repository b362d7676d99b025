// ABOUTME: Fixture records and router builders shared by integration tests
// ABOUTME: Default-configured router plus the canonical high-risk and healthy inputs

use axum::Router;
use serde_json::{json, Value};
use vitals_core::models::HealthInput;
use vitals_risk_server::config::environment::ServerConfig;
use vitals_risk_server::server::build_router;
use vitals_risk_server::RiskEngine;

/// Full router with default configuration, independent of the environment
#[allow(dead_code)]
pub fn test_router() -> Router {
    let config = ServerConfig::default();
    build_router(&config, RiskEngine::with_config(config.engine))
}

/// Sedentary, obese, low-oxygen record
#[allow(dead_code)]
pub fn high_risk_body() -> Value {
    json!({
        "step_count": 1000,
        "calories": 800,
        "total_sleep_minutes": 120,
        "bmi": 34.5,
        "heart_rate_bpm": 95,
        "spo2": 88,
        "stress_level": 5
    })
}

/// Record at every ideal value
#[allow(dead_code)]
pub const fn ideal_input() -> HealthInput {
    HealthInput {
        step_count: 10_000,
        calories: 2000.0,
        total_sleep_minutes: 480.0,
        bmi: 22.0,
        heart_rate_bpm: 70.0,
        spo2: 98.0,
        stress_level: 1.0,
    }
}
