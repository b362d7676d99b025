// ABOUTME: Ordered advisory text driven by raw readings and computed risk percentages
// ABOUTME: Six metric ladders, then one advisory per elevated risk, with a healthy fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation generator
//!
//! Output order is fixed: activity, sleep, BMI, heart rate, `SpO2`, stress,
//! then diabetes, cardiovascular, obesity and sleep-disorder advisories. Each
//! metric ladder contributes at most one message. When nothing fires the
//! result is exactly [`messages::ALL_HEALTHY`].

use crate::thresholds::{Comparison, Metric};
use serde::Serialize;
use vitals_core::models::{HealthInput, RiskAnalysis, RiskCategory};

/// Advisory texts as displayed by the mobile client
pub mod messages {
    /// Steps below 5000
    pub const INCREASE_ACTIVITY: &str =
        "🚶‍♂️ Increase daily activity - aim for 10,000 steps per day";
    /// Steps below 8000
    pub const GOOD_ACTIVITY: &str = "👍 Good activity level - try to reach 10,000 steps daily";
    /// Sleep below 7 hours
    pub const PRIORITIZE_SLEEP: &str =
        "😴 Prioritize sleep - aim for 7-9 hours nightly for optimal health";
    /// Sleep above 9 hours
    pub const EVALUATE_SLEEP_QUALITY: &str =
        "⏰ Consider evaluating sleep quality - excessive sleep may indicate underlying issues";
    /// BMI above 30
    pub const WEIGHT_MANAGEMENT: &str =
        "⚖️ Consider weight management - consult healthcare provider for personalized plan";
    /// BMI above 25
    pub const MAINTAIN_HEALTHY_WEIGHT: &str =
        "🥗 Maintain healthy weight through balanced diet and regular exercise";
    /// BMI below 18.5
    pub const HEALTHY_WEIGHT_GAIN: &str =
        "🍎 Consider healthy weight gain - consult nutritionist if needed";
    /// Heart rate above 100
    pub const ELEVATED_HEART_RATE: &str =
        "❤️ Elevated heart rate detected - consider stress management and consult doctor";
    /// Heart rate above 85
    pub const MONITOR_HEART_RATE: &str = "💓 Monitor heart rate - practice relaxation techniques";
    /// `SpO2` below 95
    pub const LOW_OXYGEN: &str =
        "🫁 Low oxygen saturation - consult healthcare provider immediately";
    /// `SpO2` below 98
    pub const BREATHING_EXERCISES: &str =
        "🌬️ Consider breathing exercises and monitor oxygen levels";
    /// Stress above 6
    pub const HIGH_STRESS: &str =
        "🧘‍♀️ High stress detected - try meditation, yoga, or stress management techniques";
    /// Stress above 4
    pub const STRESS_REDUCTION: &str =
        "😌 Practice stress reduction - regular exercise and relaxation help";
    /// Diabetes risk above the advisory threshold
    pub const DIABETES_RISK: &str =
        "🩺 High diabetes risk - regular health checkups and blood sugar monitoring recommended";
    /// Cardiovascular risk above the advisory threshold
    pub const CARDIOVASCULAR_RISK: &str =
        "💗 Cardiovascular risk detected - heart-healthy diet and regular exercise important";
    /// Obesity risk above the advisory threshold
    pub const OBESITY_RISK: &str =
        "🏃‍♀️ Weight management crucial - combine cardio and strength training";
    /// Sleep disorder risk above the advisory threshold
    pub const SLEEP_DISORDER_RISK: &str =
        "🛏️ Sleep issues detected - consider sleep hygiene improvements or sleep study";
    /// Nothing else fired
    pub const ALL_HEALTHY: &str =
        "🌟 Excellent health metrics! Keep maintaining your healthy lifestyle";
}

/// One rung of an advisory ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Advice {
    /// Condition on the ladder's metric
    pub when: Comparison,
    /// Text emitted when this is the first matching rung
    pub message: &'static str,
}

/// Mutually exclusive advisories for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdviceLadder {
    /// Metric read from the input
    pub metric: Metric,
    /// Rungs checked in order
    pub rungs: &'static [Advice],
}

impl AdviceLadder {
    /// Message of the first matching rung
    #[must_use]
    pub fn evaluate(&self, input: &HealthInput) -> Option<&'static str> {
        let value = self.metric.value(input);
        self.rungs
            .iter()
            .find(|rung| rung.when.matches(value))
            .map(|rung| rung.message)
    }
}

/// Metric ladders in output order
pub const METRIC_LADDERS: [AdviceLadder; 6] = [
    AdviceLadder {
        metric: Metric::Steps,
        rungs: &[
            Advice {
                when: Comparison::Below(5000.0),
                message: messages::INCREASE_ACTIVITY,
            },
            Advice {
                when: Comparison::Below(8000.0),
                message: messages::GOOD_ACTIVITY,
            },
        ],
    },
    AdviceLadder {
        metric: Metric::SleepHours,
        rungs: &[
            Advice {
                when: Comparison::Below(7.0),
                message: messages::PRIORITIZE_SLEEP,
            },
            Advice {
                when: Comparison::Above(9.0),
                message: messages::EVALUATE_SLEEP_QUALITY,
            },
        ],
    },
    AdviceLadder {
        metric: Metric::Bmi,
        rungs: &[
            Advice {
                when: Comparison::Above(30.0),
                message: messages::WEIGHT_MANAGEMENT,
            },
            Advice {
                when: Comparison::Above(25.0),
                message: messages::MAINTAIN_HEALTHY_WEIGHT,
            },
            Advice {
                when: Comparison::Below(18.5),
                message: messages::HEALTHY_WEIGHT_GAIN,
            },
        ],
    },
    AdviceLadder {
        metric: Metric::HeartRate,
        rungs: &[
            Advice {
                when: Comparison::Above(100.0),
                message: messages::ELEVATED_HEART_RATE,
            },
            Advice {
                when: Comparison::Above(85.0),
                message: messages::MONITOR_HEART_RATE,
            },
        ],
    },
    AdviceLadder {
        metric: Metric::Spo2,
        rungs: &[
            Advice {
                when: Comparison::Below(95.0),
                message: messages::LOW_OXYGEN,
            },
            Advice {
                when: Comparison::Below(98.0),
                message: messages::BREATHING_EXERCISES,
            },
        ],
    },
    AdviceLadder {
        metric: Metric::Stress,
        rungs: &[
            Advice {
                when: Comparison::Above(6.0),
                message: messages::HIGH_STRESS,
            },
            Advice {
                when: Comparison::Above(4.0),
                message: messages::STRESS_REDUCTION,
            },
        ],
    },
];

/// Advisory emitted when a category's risk is elevated
#[must_use]
pub const fn risk_advice(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Diabetes => messages::DIABETES_RISK,
        RiskCategory::Cardiovascular => messages::CARDIOVASCULAR_RISK,
        RiskCategory::Obesity => messages::OBESITY_RISK,
        RiskCategory::SleepDisorder => messages::SLEEP_DISORDER_RISK,
    }
}

/// Build the ordered advisory list.
///
/// `risk_above` is the strict threshold a category's percentage must exceed
/// to add its advisory.
#[must_use]
pub fn recommend(input: &HealthInput, analysis: &RiskAnalysis, risk_above: u32) -> Vec<String> {
    let metric_advice = METRIC_LADDERS
        .iter()
        .filter_map(|ladder| ladder.evaluate(input));

    let elevated_risk_advice = RiskCategory::ALL
        .into_iter()
        .filter(|category| analysis.risk_for(*category) > risk_above)
        .map(risk_advice);

    let mut recommendations: Vec<String> = metric_advice
        .chain(elevated_risk_advice)
        .map(str::to_owned)
        .collect();

    if recommendations.is_empty() {
        recommendations.push(messages::ALL_HEALTHY.to_owned());
    }

    recommendations
}
