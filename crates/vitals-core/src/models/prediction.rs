// ABOUTME: Final prediction record returned to the mobile client
// ABOUTME: Prediction, DetailedRisks, and CategoryRisk with their exact wire field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{RiskCategory, RiskColor, RiskLevel};
use serde::{Deserialize, Serialize};

/// Risk percentage and level for a single condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRisk {
    /// Risk percentage in [0, 100]
    pub risk_percentage: u32,
    /// Level derived from the percentage
    pub level: RiskLevel,
}

/// Per-condition breakdown, serialized as an object keyed by condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedRisks {
    /// Diabetes
    pub diabetes: CategoryRisk,
    /// Cardiovascular disease
    pub cardiovascular: CategoryRisk,
    /// Obesity
    pub obesity: CategoryRisk,
    /// Sleep disorders
    pub sleep_disorders: CategoryRisk,
}

impl DetailedRisks {
    /// Entry for one category
    #[must_use]
    pub const fn get(&self, category: RiskCategory) -> &CategoryRisk {
        match category {
            RiskCategory::Diabetes => &self.diabetes,
            RiskCategory::Cardiovascular => &self.cardiovascular,
            RiskCategory::Obesity => &self.obesity,
            RiskCategory::SleepDisorder => &self.sleep_disorders,
        }
    }

    /// Mean risk percentage across the four conditions
    #[must_use]
    pub fn average_risk(&self) -> f64 {
        let total: u32 = RiskCategory::ALL
            .iter()
            .map(|c| self.get(*c).risk_percentage)
            .sum();
        f64::from(total) / RiskCategory::ALL.len() as f64
    }
}

/// Complete assessment for one input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Overall wellness score in [0, 100]
    pub health_score: f64,
    /// Overall tier from the mean of the four risks
    pub risk_level: RiskLevel,
    /// Color paired with `risk_level`
    pub risk_color: RiskColor,
    /// Advisory strings in fixed check order
    pub recommendations: Vec<String>,
    /// Per-condition breakdown
    pub detailed_risks: DetailedRisks,
    /// The request record, echoed as the client sent it
    pub input_data: serde_json::Value,
}
