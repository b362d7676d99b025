// ABOUTME: Input record loading for vitals-risk-cli
// ABOUTME: Reads JSON records from disk and provides the built-in sample record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use vitals_core::models::HealthInput;

/// Read a JSON record; absent fields take their defaults
pub fn read_input_file(path: &Path) -> Result<HealthInput> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a valid health record", path.display()))
}

/// Sedentary, short-sleeping, obese sample with low oxygen saturation
pub const fn sample_input() -> HealthInput {
    HealthInput {
        step_count: 1000,
        calories: 800.0,
        total_sleep_minutes: 120.0,
        bmi: 34.5,
        heart_rate_bpm: 95.0,
        spo2: 88.0,
        stress_level: 5.0,
    }
}
