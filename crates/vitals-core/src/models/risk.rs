// ABOUTME: Risk categories, levels, colors, and the numeric risk analysis record
// ABOUTME: Shared vocabulary between the scoring engine and the HTTP response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health conditions the engine scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Type 2 diabetes
    Diabetes,
    /// Cardiovascular disease
    Cardiovascular,
    /// Obesity
    Obesity,
    /// Sleep disorders
    SleepDisorder,
}

impl RiskCategory {
    /// All categories in reporting order
    pub const ALL: [Self; 4] = [
        Self::Diabetes,
        Self::Cardiovascular,
        Self::Obesity,
        Self::SleepDisorder,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Cardiovascular => "Cardiovascular",
            Self::Obesity => "Obesity",
            Self::SleepDisorder => "Sleep Disorders",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Three-step risk classification used for both the overall tier and each category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Display color the client uses for this level
    #[must_use]
    pub const fn color(self) -> RiskColor {
        match self {
            Self::Low => RiskColor::Green,
            Self::Medium => RiskColor::Orange,
            Self::High => RiskColor::Red,
        }
    }

    /// Label as sent on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traffic-light color paired with a [`RiskLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    /// Low risk
    Green,
    /// Medium risk
    Orange,
    /// High risk
    Red,
}

impl RiskColor {
    /// Label as sent on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric output of the scoring pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Overall wellness score in [0, 100], one decimal place
    pub overall_health_score: f64,
    /// Diabetes risk percentage in [0, 100]
    pub diabetes_risk: u32,
    /// Cardiovascular risk percentage in [0, 100]
    pub cardiovascular_risk: u32,
    /// Obesity risk percentage in [0, 100]
    pub obesity_risk: u32,
    /// Sleep disorder risk percentage in [0, 100]
    pub sleep_disorder_risk: u32,
}

impl RiskAnalysis {
    /// Risk percentage for one category
    #[must_use]
    pub const fn risk_for(&self, category: RiskCategory) -> u32 {
        match category {
            RiskCategory::Diabetes => self.diabetes_risk,
            RiskCategory::Cardiovascular => self.cardiovascular_risk,
            RiskCategory::Obesity => self.obesity_risk,
            RiskCategory::SleepDisorder => self.sleep_disorder_risk,
        }
    }

    /// Mean of the four risk percentages
    #[must_use]
    pub fn average_risk(&self) -> f64 {
        let total: u32 = RiskCategory::ALL.iter().map(|c| self.risk_for(*c)).sum();
        f64::from(total) / RiskCategory::ALL.len() as f64
    }
}
