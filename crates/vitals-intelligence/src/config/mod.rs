// ABOUTME: Risk engine configuration: tier cut-offs, per-category levels, recommendation trigger
// ABOUTME: Defaults, environment overrides, validation, and a process-wide cached instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration
//!
//! Only the classification cut-offs are configurable. The point tables in
//! [`crate::risk_rules`] and the recommendation ladders are fixed data.
//!
//! | variable | default |
//! |---|---|
//! | `VITALS_TIER_MEDIUM_THRESHOLD` | 30 |
//! | `VITALS_TIER_HIGH_THRESHOLD` | 60 |
//! | `VITALS_LEVEL_MEDIUM_THRESHOLD` | 30 |
//! | `VITALS_LEVEL_HIGH_THRESHOLD` | 60 |
//! | `VITALS_RECOMMENDATION_RISK_THRESHOLD` | 50 |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::risk_rules::MAX_RISK;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Cut-offs on the mean risk for the overall tier.
///
/// Half-open on the low side: `avg < medium_min` is Low,
/// `avg < high_min` is Medium, anything else is High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Lowest mean risk classified Medium
    pub medium_min: f64,
    /// Lowest mean risk classified High
    pub high_min: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium_min: 30.0,
            high_min: 60.0,
        }
    }
}

/// Strict lower bounds for a single category's level.
///
/// `pct > high_above` is High, `pct > medium_above` is Medium, else Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLevelThresholds {
    /// Percentages above this are at least Medium
    pub medium_above: u32,
    /// Percentages above this are High
    pub high_above: u32,
}

impl Default for CategoryLevelThresholds {
    fn default() -> Self {
        Self {
            medium_above: 30,
            high_above: 60,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Overall tier cut-offs
    pub tier: TierThresholds,
    /// Per-category level cut-offs
    pub category_levels: CategoryLevelThresholds,
    /// A category adds its advisory when its risk is strictly above this
    pub recommendation_risk_above: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tier: TierThresholds::default(),
            category_levels: CategoryLevelThresholds::default(),
            recommendation_risk_above: 50,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load risk engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the cut-offs are ordered and within [0, 100]
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = f64::from(MAX_RISK);

        if !(0.0..=max).contains(&self.tier.medium_min)
            || !(0.0..=max).contains(&self.tier.high_min)
        {
            return Err(ConfigError::ValueOutOfRange(
                "tier thresholds must be between 0 and 100",
            ));
        }
        if self.tier.medium_min >= self.tier.high_min {
            return Err(ConfigError::InvalidRange(
                "tier medium_min must be < high_min",
            ));
        }

        if self.category_levels.high_above > MAX_RISK {
            return Err(ConfigError::ValueOutOfRange(
                "category level thresholds must be between 0 and 100",
            ));
        }
        if self.category_levels.medium_above >= self.category_levels.high_above {
            return Err(ConfigError::InvalidRange(
                "category medium_above must be < high_above",
            ));
        }

        if self.recommendation_risk_above > MAX_RISK {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation risk threshold must be between 0 and 100",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("VITALS_TIER_MEDIUM_THRESHOLD", &mut self.tier.medium_min)?;
        Self::apply_env_var("VITALS_TIER_HIGH_THRESHOLD", &mut self.tier.high_min)?;
        Self::apply_env_var(
            "VITALS_LEVEL_MEDIUM_THRESHOLD",
            &mut self.category_levels.medium_above,
        )?;
        Self::apply_env_var(
            "VITALS_LEVEL_HIGH_THRESHOLD",
            &mut self.category_levels.high_above,
        )?;
        Self::apply_env_var(
            "VITALS_RECOMMENDATION_RISK_THRESHOLD",
            &mut self.recommendation_risk_above,
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_tier_rejected() {
        let config = EngineConfig {
            tier: TierThresholds {
                medium_min: 60.0,
                high_min: 30.0,
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_level_above_hundred_rejected() {
        let config = EngineConfig {
            category_levels: CategoryLevelThresholds {
                medium_above: 30,
                high_above: 120,
            },
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_recommendation_threshold_above_hundred_rejected() {
        let config = EngineConfig {
            recommendation_risk_above: 101,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
