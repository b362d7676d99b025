// ABOUTME: Core data models for the Vitals risk assessment API
// ABOUTME: Re-exports HealthInput, RiskAnalysis, Prediction and the risk vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `HealthInput`: one day of biometric readings from the client
//! - `RiskAnalysis`: health score plus four risk percentages
//! - `Prediction`: the full response, including tier, color and recommendations
//!
//! Every value here is immutable once built and derived from exactly one
//! `HealthInput`; nothing is stored between requests.

mod health;
mod prediction;
mod risk;

pub use health::HealthInput;
pub use prediction::{CategoryRisk, DetailedRisks, Prediction};
pub use risk::{RiskAnalysis, RiskCategory, RiskColor, RiskLevel};
