// ABOUTME: Biometric input record submitted by the mobile client for risk assessment
// ABOUTME: HealthInput with per-field defaults and domain checks used for logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, domains, fields};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: f64 = 60.0;

/// One day of biometric readings.
///
/// Values are taken as-is: nothing here rejects negative counts or a stress
/// level outside 1-10. Absent fields deserialize to the defaults in
/// [`crate::constants::defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    /// Daily step count
    #[serde(default = "default_step_count")]
    pub step_count: i64,
    /// Daily calorie intake
    #[serde(default = "default_calories")]
    pub calories: f64,
    /// Total sleep in minutes
    #[serde(default = "default_total_sleep_minutes")]
    pub total_sleep_minutes: f64,
    /// Body mass index
    #[serde(default = "default_bmi")]
    pub bmi: f64,
    /// Heart rate in beats per minute
    #[serde(default = "default_heart_rate_bpm")]
    pub heart_rate_bpm: f64,
    /// Blood oxygen saturation percentage
    #[serde(default = "default_spo2")]
    pub spo2: f64,
    /// Self-reported stress level (1-10)
    #[serde(default = "default_stress_level")]
    pub stress_level: f64,
}

const fn default_step_count() -> i64 {
    defaults::STEP_COUNT
}

const fn default_calories() -> f64 {
    defaults::CALORIES
}

const fn default_total_sleep_minutes() -> f64 {
    defaults::TOTAL_SLEEP_MINUTES
}

const fn default_bmi() -> f64 {
    defaults::BMI
}

const fn default_heart_rate_bpm() -> f64 {
    defaults::HEART_RATE_BPM
}

const fn default_spo2() -> f64 {
    defaults::SPO2
}

const fn default_stress_level() -> f64 {
    defaults::STRESS_LEVEL
}

impl Default for HealthInput {
    fn default() -> Self {
        Self {
            step_count: defaults::STEP_COUNT,
            calories: defaults::CALORIES,
            total_sleep_minutes: defaults::TOTAL_SLEEP_MINUTES,
            bmi: defaults::BMI,
            heart_rate_bpm: defaults::HEART_RATE_BPM,
            spo2: defaults::SPO2,
            stress_level: defaults::STRESS_LEVEL,
        }
    }
}

impl HealthInput {
    /// Sleep duration in hours
    #[must_use]
    pub fn sleep_hours(&self) -> f64 {
        self.total_sleep_minutes / MINUTES_PER_HOUR
    }

    /// The record as a JSON object with the wire field names
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "step_count": self.step_count,
            "calories": self.calories,
            "total_sleep_minutes": self.total_sleep_minutes,
            "bmi": self.bmi,
            "heart_rate_bpm": self.heart_rate_bpm,
            "spo2": self.spo2,
            "stress_level": self.stress_level,
        })
    }

    /// Step count as a float for threshold comparisons
    #[must_use]
    pub fn steps(&self) -> f64 {
        self.step_count as f64
    }

    /// Names of fields holding values outside their intended domain.
    ///
    /// Purely informational: the engine scores these values unchanged.
    #[must_use]
    pub fn out_of_range_fields(&self) -> Vec<&'static str> {
        let checks = [
            (fields::STEP_COUNT, self.step_count < 0),
            (fields::CALORIES, self.calories < 0.0),
            (fields::TOTAL_SLEEP_MINUTES, self.total_sleep_minutes < 0.0),
            (fields::BMI, self.bmi <= 0.0),
            (fields::HEART_RATE_BPM, self.heart_rate_bpm <= 0.0),
            (
                fields::SPO2,
                !(0.0..=domains::SPO2_MAX).contains(&self.spo2),
            ),
            (
                fields::STRESS_LEVEL,
                !(domains::STRESS_MIN..=domains::STRESS_MAX).contains(&self.stress_level),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(name, out_of_range)| out_of_range.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_uses_wire_field_names() {
        let json = HealthInput::default().to_json();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), fields::REQUIRED.len());
        for field in fields::REQUIRED {
            assert!(object.contains_key(field), "missing {field}");
        }
        assert_eq!(json[fields::STEP_COUNT], defaults::STEP_COUNT);
    }

    #[test]
    fn test_out_of_range_fields_reports_in_field_order() {
        let input = HealthInput {
            step_count: -1,
            stress_level: 11.0,
            ..HealthInput::default()
        };
        assert_eq!(
            input.out_of_range_fields(),
            vec![fields::STEP_COUNT, fields::STRESS_LEVEL]
        );
    }
}
