// ABOUTME: RiskEngine facade composing sub-scores, risk tables, tiers, and recommendations
// ABOUTME: Stateless and Copy; one value can serve any number of concurrent requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::classification::{level_for_risk, tier_for_average};
use crate::config::EngineConfig;
use crate::recommendation_engine::recommend;
use crate::risk_rules::{CARDIOVASCULAR, DIABETES, OBESITY, SLEEP_DISORDER};
use crate::subscores::SubScores;
use vitals_core::models::{
    CategoryRisk, DetailedRisks, HealthInput, Prediction, RiskAnalysis, RiskCategory, RiskLevel,
};

/// Health risk engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskEngine {
    config: EngineConfig,
}

impl Default for RiskEngine {
    /// Engine with built-in thresholds, ignoring environment overrides
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl RiskEngine {
    /// Create an engine from the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(*EngineConfig::global())
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Health score and the four risk percentages
    #[must_use]
    pub fn compute_risk_analysis(&self, input: &HealthInput) -> RiskAnalysis {
        RiskAnalysis {
            overall_health_score: SubScores::from_input(input).overall_health_score(),
            diabetes_risk: DIABETES.score(input),
            cardiovascular_risk: CARDIOVASCULAR.score(input),
            obesity_risk: OBESITY.score(input),
            sleep_disorder_risk: SLEEP_DISORDER.score(input),
        }
    }

    /// Ordered advisory strings for an input and its analysis
    #[must_use]
    pub fn generate_recommendations(
        &self,
        input: &HealthInput,
        analysis: &RiskAnalysis,
    ) -> Vec<String> {
        recommend(input, analysis, self.config.recommendation_risk_above)
    }

    /// Overall tier from the mean risk
    #[must_use]
    pub fn classify(&self, analysis: &RiskAnalysis) -> RiskLevel {
        tier_for_average(analysis.average_risk(), &self.config.tier)
    }

    /// Level of one category's percentage
    #[must_use]
    pub const fn category_level(&self, risk: u32) -> RiskLevel {
        level_for_risk(risk, &self.config.category_levels)
    }

    /// Per-category percentages with their levels
    #[must_use]
    pub fn detailed_risks(&self, analysis: &RiskAnalysis) -> DetailedRisks {
        let entry = |category: RiskCategory| {
            let risk_percentage = analysis.risk_for(category);
            CategoryRisk {
                risk_percentage,
                level: self.category_level(risk_percentage),
            }
        };

        DetailedRisks {
            diabetes: entry(RiskCategory::Diabetes),
            cardiovascular: entry(RiskCategory::Cardiovascular),
            obesity: entry(RiskCategory::Obesity),
            sleep_disorders: entry(RiskCategory::SleepDisorder),
        }
    }

    /// Full assessment of one input record.
    ///
    /// `input_data` carries the typed record; callers holding the raw request
    /// object replace it with that.
    #[must_use]
    pub fn predict(&self, input: HealthInput) -> Prediction {
        let analysis = self.compute_risk_analysis(&input);
        let recommendations = self.generate_recommendations(&input, &analysis);
        let risk_level = self.classify(&analysis);

        Prediction {
            health_score: analysis.overall_health_score,
            risk_level,
            risk_color: risk_level.color(),
            recommendations,
            detailed_risks: self.detailed_risks(&analysis),
            input_data: input.to_json(),
        }
    }
}
