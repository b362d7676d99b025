// ABOUTME: Health risk engine crate root for the Vitals platform
// ABOUTME: Sub-score normalization, additive risk tables, tiering, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Intelligence
//!
//! A deterministic rules engine. Given one [`HealthInput`] it produces a
//! health score, four risk percentages, an overall tier, and advisory text.
//! Nothing here performs I/O or keeps state between calls.
//!
//! ```rust
//! use vitals_core::models::{HealthInput, RiskLevel};
//! use vitals_intelligence::RiskEngine;
//!
//! let engine = RiskEngine::default();
//! let prediction = engine.predict(HealthInput::default());
//! assert_eq!(prediction.risk_level, RiskLevel::Low);
//! ```
//!
//! [`HealthInput`]: vitals_core::models::HealthInput

/// Low/Medium/High mapping for tiers and categories
pub mod classification;

/// Engine thresholds, environment overrides, and validation
pub mod config;

/// `RiskEngine` facade
pub mod engine;

/// Advisory ladders and the recommendation generator
pub mod recommendation_engine;

/// Additive point tables per condition
pub mod risk_rules;

/// Normalized wellness sub-scores and the overall health score
pub mod subscores;

/// Metric selectors and strict comparisons
pub mod thresholds;

pub use config::{ConfigError, EngineConfig};
pub use engine::RiskEngine;
pub use subscores::SubScores;
