// ABOUTME: Rule table dump command for vitals-risk-cli
// ABOUTME: Prints the additive risk tables and advisory ladders as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde_json::json;
use vitals_intelligence::recommendation_engine::METRIC_LADDERS;
use vitals_intelligence::risk_rules::{ALL_RULES, MAX_RISK};
use vitals_intelligence::EngineConfig;

use crate::helpers::display::print_json;

/// Print the active rule data
pub fn run() -> Result<()> {
    print_json(&json!({
        "max_risk": MAX_RISK,
        "risk_rules": ALL_RULES,
        "advice_ladders": METRIC_LADDERS,
        "engine_config": EngineConfig::global(),
    }))
}
