// ABOUTME: Property-style tests for the risk engine across input sweeps
// ABOUTME: Bounds, determinism, BMI monotonicity, threshold strictness, and tier boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use vitals_core::models::{HealthInput, RiskAnalysis, RiskCategory, RiskLevel};
use vitals_intelligence::recommendation_engine::messages;
use vitals_intelligence::RiskEngine;

const fn ideal_input() -> HealthInput {
    HealthInput {
        step_count: 10_000,
        calories: 2000.0,
        total_sleep_minutes: 480.0,
        bmi: 22.0,
        heart_rate_bpm: 70.0,
        spo2: 98.0,
        stress_level: 1.0,
    }
}

fn engine() -> RiskEngine {
    RiskEngine::default()
}

fn sweep() -> Vec<HealthInput> {
    let mut inputs = Vec::new();
    for step_count in [-500, 0, 4999, 5000, 7999, 8000, 25_000] {
        for bmi in [0.0, 18.0, 25.0, 30.0, 45.0] {
            for stress_level in [0.0, 1.0, 4.5, 6.5, 12.0] {
                for heart_rate_bpm in [40.0, 86.0, 101.0, 180.0] {
                    inputs.push(HealthInput {
                        step_count,
                        calories: 3500.0,
                        total_sleep_minutes: 300.0,
                        bmi,
                        heart_rate_bpm,
                        spo2: 91.0,
                        stress_level,
                    });
                }
            }
        }
    }
    inputs
}

#[test]
fn test_outputs_stay_in_bounds() {
    let engine = engine();
    for input in sweep() {
        let analysis = engine.compute_risk_analysis(&input);
        assert!(
            (0.0..=100.0).contains(&analysis.overall_health_score),
            "score out of range for {input:?}"
        );
        for category in RiskCategory::ALL {
            assert!(analysis.risk_for(category) <= 100);
        }
    }
}

#[test]
fn test_predictions_are_deterministic() {
    let engine = engine();
    for input in sweep().into_iter().step_by(17) {
        assert_eq!(engine.predict(input), engine.predict(input));
    }
}

#[test]
fn test_bmi_monotonicity() {
    let engine = engine();
    let mut previous: Option<RiskAnalysis> = None;

    for tenth in 250..=310 {
        let input = HealthInput {
            bmi: f64::from(tenth) / 10.0,
            ..HealthInput::default()
        };
        let analysis = engine.compute_risk_analysis(&input);
        if let Some(prev) = previous {
            assert!(analysis.diabetes_risk >= prev.diabetes_risk);
            assert!(analysis.cardiovascular_risk >= prev.cardiovascular_risk);
            assert!(analysis.obesity_risk >= prev.obesity_risk);
        }
        previous = Some(analysis);
    }
}

fn bmi_risks(bmi: f64) -> (u32, u32, u32) {
    let analysis = engine().compute_risk_analysis(&HealthInput {
        bmi,
        ..HealthInput::default()
    });
    (
        analysis.diabetes_risk,
        analysis.cardiovascular_risk,
        analysis.obesity_risk,
    )
}

#[test]
fn test_bmi_25_to_31_strictly_increases_risks() {
    let low = bmi_risks(25.0);
    let high = bmi_risks(31.0);

    assert_eq!(low, (15, 0, 10));
    assert_eq!(high, (55, 25, 70));
    assert!(high.0 > low.0);
    assert!(high.1 > low.1);
    assert!(high.2 > low.2);
}

#[test]
fn test_bmi_band_crossings_each_raise_risks() {
    // below both bands, inside >25, inside >30
    let steps = [bmi_risks(25.0), bmi_risks(25.5), bmi_risks(30.5)];
    assert_eq!(steps[1], (35, 15, 40));

    for pair in steps.windows(2) {
        let (before, after) = (pair[0], pair[1]);
        assert!(after.0 > before.0, "diabetes {before:?} -> {after:?}");
        assert!(after.1 > before.1, "cardiovascular {before:?} -> {after:?}");
        assert!(after.2 > before.2, "obesity {before:?} -> {after:?}");
    }
}

#[test]
fn test_bmi_threshold_is_strict() {
    let engine = engine();
    let at = engine.compute_risk_analysis(&HealthInput {
        bmi: 30.0,
        ..ideal_input()
    });
    let above = engine.compute_risk_analysis(&HealthInput {
        bmi: 30.0001,
        ..ideal_input()
    });

    assert_eq!(at.obesity_risk, 30);
    assert_eq!(above.obesity_risk, 60);
    assert_eq!(at.diabetes_risk, 20);
    assert_eq!(above.diabetes_risk, 40);
}

#[test]
fn test_ideal_input_scores_perfectly() {
    let prediction = engine().predict(ideal_input());
    assert!((prediction.health_score - 100.0).abs() < f64::EPSILON);
    assert_eq!(prediction.risk_level, RiskLevel::Low);
    assert_eq!(prediction.recommendations, vec![messages::ALL_HEALTHY]);
}

#[test]
fn test_tier_boundaries() {
    let engine = engine();
    let at_thirty = RiskAnalysis {
        overall_health_score: 50.0,
        diabetes_risk: 30,
        cardiovascular_risk: 30,
        obesity_risk: 30,
        sleep_disorder_risk: 30,
    };
    let at_sixty = RiskAnalysis {
        diabetes_risk: 60,
        cardiovascular_risk: 60,
        obesity_risk: 60,
        sleep_disorder_risk: 60,
        ..at_thirty
    };
    let just_below = RiskAnalysis {
        sleep_disorder_risk: 29,
        ..at_thirty
    };

    assert_eq!(engine.classify(&just_below), RiskLevel::Low);
    assert_eq!(engine.classify(&at_thirty), RiskLevel::Medium);
    assert_eq!(engine.classify(&at_sixty), RiskLevel::High);
}

#[test]
fn test_nan_reading_does_not_poison_score() {
    let input = HealthInput {
        heart_rate_bpm: f64::NAN,
        ..ideal_input()
    };
    let analysis = engine().compute_risk_analysis(&input);
    // heart rate sub-score collapses to 0, the other five stay at 1
    assert!((analysis.overall_health_score - 83.3).abs() < 1e-9);
    assert_eq!(analysis.cardiovascular_risk, 0);
}
