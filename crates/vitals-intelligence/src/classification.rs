// ABOUTME: Maps risk percentages to Low/Medium/High for the overall tier and each category
// ABOUTME: Tier uses half-open bands on the mean risk; category levels use strict lower bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{CategoryLevelThresholds, TierThresholds};
use vitals_core::models::RiskLevel;

/// Overall tier from the mean of the four risk percentages
#[must_use]
pub fn tier_for_average(average_risk: f64, thresholds: &TierThresholds) -> RiskLevel {
    if average_risk < thresholds.medium_min {
        RiskLevel::Low
    } else if average_risk < thresholds.high_min {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Level of a single category's risk percentage
#[must_use]
pub const fn level_for_risk(risk: u32, thresholds: &CategoryLevelThresholds) -> RiskLevel {
    if risk > thresholds.high_above {
        RiskLevel::High
    } else if risk > thresholds.medium_above {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
