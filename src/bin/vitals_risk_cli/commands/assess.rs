// ABOUTME: Local assessment command for vitals-risk-cli
// ABOUTME: Runs the risk engine in-process and prints a report or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use tracing::warn;
use vitals_core::models::HealthInput;
use vitals_intelligence::RiskEngine;

use crate::helpers::display::{display_prediction, print_json};

/// Score `input` with the engine configured from the environment
pub fn run(input: HealthInput, json: bool) -> Result<()> {
    let out_of_range = input.out_of_range_fields();
    if !out_of_range.is_empty() {
        warn!("Values outside expected ranges: {}", out_of_range.join(", "));
    }

    let prediction = RiskEngine::new().predict(input);

    if json {
        print_json(&prediction)
    } else {
        display_prediction(&prediction);
        Ok(())
    }
}
