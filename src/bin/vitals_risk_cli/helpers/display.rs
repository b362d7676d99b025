// ABOUTME: Output formatting helpers for vitals-risk-cli
// ABOUTME: Human-readable prediction reports and pretty JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use serde::Serialize;
use vitals_core::models::{Prediction, RiskCategory};

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a prediction as a short report
pub fn display_prediction(prediction: &Prediction) {
    println!("\nHealth Risk Assessment");
    println!("{}", "=".repeat(60));
    println!("   Health Score: {:.1} / 100", prediction.health_score);
    println!(
        "   Overall Risk: {} ({})",
        prediction.risk_level, prediction.risk_color
    );

    println!("\nRisk Breakdown:");
    for category in RiskCategory::ALL {
        let risk = prediction.detailed_risks.get(category);
        println!(
            "   {:<16} {:>3}%  {}",
            category.display_name(),
            risk.risk_percentage,
            risk.level
        );
    }

    println!("\nRecommendations:");
    for (index, recommendation) in prediction.recommendations.iter().enumerate() {
        println!("   {}. {recommendation}", index + 1);
    }
    println!("{}", "=".repeat(60));
}
