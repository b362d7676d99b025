// ABOUTME: Application-wide constants for input defaults, field names, and service identity
// ABOUTME: Single source of truth for the wire names of the biometric input record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wire names of the biometric input fields
pub mod fields {
    /// Daily step count
    pub const STEP_COUNT: &str = "step_count";
    /// Daily calorie intake
    pub const CALORIES: &str = "calories";
    /// Total sleep in minutes
    pub const TOTAL_SLEEP_MINUTES: &str = "total_sleep_minutes";
    /// Body mass index
    pub const BMI: &str = "bmi";
    /// Resting heart rate in beats per minute
    pub const HEART_RATE_BPM: &str = "heart_rate_bpm";
    /// Blood oxygen saturation percentage
    pub const SPO2: &str = "spo2";
    /// Self-reported stress level
    pub const STRESS_LEVEL: &str = "stress_level";

    /// Fields every prediction request must carry, in validation order
    pub const REQUIRED: [&str; 7] = [
        STEP_COUNT,
        CALORIES,
        TOTAL_SLEEP_MINUTES,
        BMI,
        HEART_RATE_BPM,
        SPO2,
        STRESS_LEVEL,
    ];
}

/// Values substituted for absent input fields
pub mod defaults {
    /// Default daily steps
    pub const STEP_COUNT: i64 = 5000;
    /// Default daily calories
    pub const CALORIES: f64 = 2000.0;
    /// Default sleep (8 hours)
    pub const TOTAL_SLEEP_MINUTES: f64 = 480.0;
    /// Default BMI
    pub const BMI: f64 = 25.0;
    /// Default resting heart rate
    pub const HEART_RATE_BPM: f64 = 75.0;
    /// Default blood oxygen saturation
    pub const SPO2: f64 = 95.0;
    /// Default stress level
    pub const STRESS_LEVEL: f64 = 3.0;
}

/// Intended (unenforced) value domains of the input fields
pub mod domains {
    /// Lowest stress level on the self-report scale
    pub const STRESS_MIN: f64 = 1.0;
    /// Highest stress level on the self-report scale
    pub const STRESS_MAX: f64 = 10.0;
    /// Upper bound of a saturation percentage
    pub const SPO2_MAX: f64 = 100.0;
}

/// Service names used in logs and health responses
pub mod service_names {
    /// HTTP API server
    pub const VITALS_RISK_SERVER: &str = "vitals-risk-server";
    /// Command-line client
    pub const VITALS_RISK_CLI: &str = "vitals-risk-cli";
}
