// ABOUTME: Normalizes raw biometric readings into [0, 1] wellness sub-scores
// ABOUTME: Each sub-score measures distance from an ideal value; their mean drives the health score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitals_core::models::HealthInput;

/// Reference values for the sub-score formulas
pub mod ideals {
    /// Steps for a perfect activity score
    pub const STEPS: f64 = 10_000.0;
    /// Ideal nightly sleep in hours
    pub const SLEEP_HOURS: f64 = 8.0;
    /// Sleep deviation (hours) that drives the score to zero
    pub const SLEEP_TOLERANCE_HOURS: f64 = 8.0;
    /// Ideal BMI
    pub const BMI: f64 = 22.0;
    /// BMI deviation that drives the score to zero
    pub const BMI_TOLERANCE: f64 = 15.0;
    /// Ideal resting heart rate
    pub const HEART_RATE: f64 = 70.0;
    /// Heart rate deviation that drives the score to zero
    pub const HEART_RATE_TOLERANCE: f64 = 50.0;
    /// Saturation for a perfect oxygen score
    pub const SPO2: f64 = 98.0;
    /// Lowest point of the stress scale
    pub const STRESS_FLOOR: f64 = 1.0;
    /// Width of the stress scale
    pub const STRESS_SPAN: f64 = 9.0;
}

/// Six normalized sub-scores, each already clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    /// Activity
    pub steps: f64,
    /// Sleep duration
    pub sleep: f64,
    /// Body mass index
    pub bmi: f64,
    /// Heart rate
    pub heart_rate: f64,
    /// Blood oxygen
    pub spo2: f64,
    /// Stress
    pub stress: f64,
}

impl SubScores {
    /// Compute all six sub-scores for `input`
    #[must_use]
    pub fn from_input(input: &HealthInput) -> Self {
        let sleep_hours = input.sleep_hours();
        Self {
            steps: unit((input.steps() / ideals::STEPS).min(1.0)),
            sleep: unit(
                1.0 - (ideals::SLEEP_HOURS - sleep_hours).abs() / ideals::SLEEP_TOLERANCE_HOURS,
            ),
            bmi: unit(1.0 - (ideals::BMI - input.bmi).abs() / ideals::BMI_TOLERANCE),
            heart_rate: unit(
                1.0 - (ideals::HEART_RATE - input.heart_rate_bpm).abs()
                    / ideals::HEART_RATE_TOLERANCE,
            ),
            spo2: unit((input.spo2 / ideals::SPO2).min(1.0)),
            stress: unit(1.0 - (input.stress_level - ideals::STRESS_FLOOR) / ideals::STRESS_SPAN),
        }
    }

    /// Sub-scores in fixed order: steps, sleep, BMI, heart rate, `SpO2`, stress
    #[must_use]
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.steps,
            self.sleep,
            self.bmi,
            self.heart_rate,
            self.spo2,
            self.stress,
        ]
    }

    /// Arithmetic mean of the six sub-scores
    #[must_use]
    pub fn mean(&self) -> f64 {
        let scores = self.as_array();
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    /// Overall health score in [0, 100] with one decimal place
    #[must_use]
    pub fn overall_health_score(&self) -> f64 {
        round_to_tenth(self.mean() * 100.0)
    }
}

/// Clamp to [0, 1]; NaN collapses to 0
fn unit(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
