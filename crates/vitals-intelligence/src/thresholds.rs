// ABOUTME: Metric selectors and strict threshold comparisons shared by all rule tables
// ABOUTME: Maps a HealthInput to the raw value a rule inspects and tests it against a bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitals_core::models::HealthInput;

/// Raw reading a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Daily steps
    Steps,
    /// Daily calories
    Calories,
    /// Sleep converted to hours
    SleepHours,
    /// Body mass index
    Bmi,
    /// Heart rate in bpm
    HeartRate,
    /// Blood oxygen saturation
    Spo2,
    /// Stress level
    Stress,
}

impl Metric {
    /// Read this metric from an input record
    #[must_use]
    pub fn value(self, input: &HealthInput) -> f64 {
        match self {
            Self::Steps => input.steps(),
            Self::Calories => input.calories,
            Self::SleepHours => input.sleep_hours(),
            Self::Bmi => input.bmi,
            Self::HeartRate => input.heart_rate_bpm,
            Self::Spo2 => input.spo2,
            Self::Stress => input.stress_level,
        }
    }
}

/// Strict comparison against a fixed bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Matches values strictly greater than the bound
    Above(f64),
    /// Matches values strictly less than the bound
    Below(f64),
}

impl Comparison {
    /// Whether `value` falls on the matching side of the bound.
    ///
    /// NaN never matches.
    #[must_use]
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::Above(bound) => value > bound,
            Self::Below(bound) => value < bound,
        }
    }
}
