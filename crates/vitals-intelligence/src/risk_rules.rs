// ABOUTME: Additive point tables for diabetes, cardiovascular, obesity, and sleep disorder risk
// ABOUTME: Each factor is an if/elif ladder of bands; contributions are summed and capped at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Risk rule tables
//!
//! A [`RiskRule`] is a list of [`Factor`]s. Each factor reads one metric and
//! walks its bands in order; the first band that matches contributes its
//! points and the rest of that factor is skipped. Factor contributions are
//! added and the total is capped at [`MAX_RISK`].

use crate::thresholds::{Comparison, Metric};
use serde::Serialize;
use vitals_core::models::{HealthInput, RiskCategory};

/// Upper bound of every risk percentage
pub const MAX_RISK: u32 = 100;

/// One rung of a factor ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    /// Condition on the factor's metric
    pub when: Comparison,
    /// Points added when this is the first matching band
    pub points: u32,
}

/// One input metric contributing to a risk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Factor {
    /// Metric read from the input
    pub metric: Metric,
    /// Mutually exclusive bands, checked in order
    pub bands: &'static [Band],
}

impl Factor {
    /// Points from the first matching band, or zero
    #[must_use]
    pub fn points(&self, input: &HealthInput) -> u32 {
        let value = self.metric.value(input);
        self.bands
            .iter()
            .find(|band| band.when.matches(value))
            .map_or(0, |band| band.points)
    }
}

/// Complete point table for one condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskRule {
    /// Condition this table scores
    pub category: RiskCategory,
    /// Independent factors, summed
    pub factors: &'static [Factor],
}

impl RiskRule {
    /// Risk percentage for `input`, capped at [`MAX_RISK`]
    #[must_use]
    pub fn score(&self, input: &HealthInput) -> u32 {
        self.factors
            .iter()
            .map(|factor| factor.points(input))
            .sum::<u32>()
            .min(MAX_RISK)
    }
}

/// Diabetes: BMI, activity, stress
pub const DIABETES: RiskRule = RiskRule {
    category: RiskCategory::Diabetes,
    factors: &[
        Factor {
            metric: Metric::Bmi,
            bands: &[
                Band {
                    when: Comparison::Above(30.0),
                    points: 40,
                },
                Band {
                    when: Comparison::Above(25.0),
                    points: 20,
                },
            ],
        },
        Factor {
            metric: Metric::Steps,
            bands: &[
                Band {
                    when: Comparison::Below(5000.0),
                    points: 30,
                },
                Band {
                    when: Comparison::Below(8000.0),
                    points: 15,
                },
            ],
        },
        Factor {
            metric: Metric::Stress,
            bands: &[
                Band {
                    when: Comparison::Above(6.0),
                    points: 20,
                },
                Band {
                    when: Comparison::Above(4.0),
                    points: 10,
                },
            ],
        },
    ],
};

/// Cardiovascular: heart rate, BMI, stress, inactivity
pub const CARDIOVASCULAR: RiskRule = RiskRule {
    category: RiskCategory::Cardiovascular,
    factors: &[
        Factor {
            metric: Metric::HeartRate,
            bands: &[
                Band {
                    when: Comparison::Above(100.0),
                    points: 35,
                },
                Band {
                    when: Comparison::Above(85.0),
                    points: 20,
                },
            ],
        },
        Factor {
            metric: Metric::Bmi,
            bands: &[
                Band {
                    when: Comparison::Above(30.0),
                    points: 25,
                },
                Band {
                    when: Comparison::Above(25.0),
                    points: 15,
                },
            ],
        },
        Factor {
            metric: Metric::Stress,
            bands: &[
                Band {
                    when: Comparison::Above(6.0),
                    points: 25,
                },
                Band {
                    when: Comparison::Above(4.0),
                    points: 10,
                },
            ],
        },
        Factor {
            metric: Metric::Steps,
            bands: &[Band {
                when: Comparison::Below(5000.0),
                points: 15,
            }],
        },
    ],
};

/// Obesity: BMI, activity, calorie surplus
pub const OBESITY: RiskRule = RiskRule {
    category: RiskCategory::Obesity,
    factors: &[
        Factor {
            metric: Metric::Bmi,
            bands: &[
                Band {
                    when: Comparison::Above(30.0),
                    points: 60,
                },
                Band {
                    when: Comparison::Above(25.0),
                    points: 30,
                },
            ],
        },
        Factor {
            metric: Metric::Steps,
            bands: &[
                Band {
                    when: Comparison::Below(5000.0),
                    points: 25,
                },
                Band {
                    when: Comparison::Below(8000.0),
                    points: 10,
                },
            ],
        },
        Factor {
            metric: Metric::Calories,
            bands: &[Band {
                when: Comparison::Above(3000.0),
                points: 15,
            }],
        },
    ],
};

/// Sleep disorders: sleep duration (short or long), stress, elevated heart rate
pub const SLEEP_DISORDER: RiskRule = RiskRule {
    category: RiskCategory::SleepDisorder,
    factors: &[
        Factor {
            metric: Metric::SleepHours,
            bands: &[
                Band {
                    when: Comparison::Below(6.0),
                    points: 40,
                },
                Band {
                    when: Comparison::Below(7.0),
                    points: 20,
                },
                Band {
                    when: Comparison::Above(9.0),
                    points: 15,
                },
            ],
        },
        Factor {
            metric: Metric::Stress,
            bands: &[
                Band {
                    when: Comparison::Above(6.0),
                    points: 30,
                },
                Band {
                    when: Comparison::Above(4.0),
                    points: 15,
                },
            ],
        },
        Factor {
            metric: Metric::HeartRate,
            bands: &[Band {
                when: Comparison::Above(85.0),
                points: 15,
            }],
        },
    ],
};

/// All tables in reporting order
pub const ALL_RULES: [RiskRule; 4] = [DIABETES, CARDIOVASCULAR, OBESITY, SLEEP_DISORDER];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_band_wins() {
        let input = HealthInput {
            bmi: 35.0,
            ..HealthInput::default()
        };
        // >30 band only, the >25 band must not stack on top of it
        assert_eq!(DIABETES.factors[0].points(&input), 40);
    }

    #[test]
    fn test_no_band_contributes_zero() {
        let input = HealthInput {
            calories: 2500.0,
            ..HealthInput::default()
        };
        assert_eq!(OBESITY.factors[2].points(&input), 0);
    }

    #[test]
    fn test_sleep_ladder_three_exclusive_bands() {
        let factor = SLEEP_DISORDER.factors[0];
        let at = |hours: f64| HealthInput {
            total_sleep_minutes: hours * 60.0,
            ..HealthInput::default()
        };
        assert_eq!(factor.points(&at(5.0)), 40);
        assert_eq!(factor.points(&at(6.5)), 20);
        assert_eq!(factor.points(&at(8.0)), 0);
        assert_eq!(factor.points(&at(9.5)), 15);
    }

    #[test]
    fn test_maximum_points_are_capped() {
        let input = HealthInput {
            step_count: 0,
            bmi: 40.0,
            heart_rate_bpm: 120.0,
            stress_level: 10.0,
            calories: 4000.0,
            total_sleep_minutes: 60.0,
            ..HealthInput::default()
        };
        for rule in ALL_RULES {
            assert!(rule.score(&input) <= MAX_RISK);
        }
        // 60 + 25 + 15 = 100 exactly
        assert_eq!(OBESITY.score(&input), 100);
    }

    #[test]
    fn test_all_rules_in_reporting_order() {
        let categories: Vec<RiskCategory> = ALL_RULES.iter().map(|rule| rule.category).collect();
        assert_eq!(categories, RiskCategory::ALL.to_vec());
    }
}
