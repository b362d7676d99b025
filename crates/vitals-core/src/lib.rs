// ABOUTME: Core types and constants for the Vitals health risk platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitals Core
//!
//! Foundation crate providing shared types for the Vitals risk platform. It
//! has no knowledge of how risks are scored or how requests are served, so
//! both the engine and the server depend on it without depending on each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `HealthInput`, `RiskAnalysis`, `Prediction` and risk enums
//! - **constants**: Field names, defaults, and service names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (input record, risk analysis, prediction)
pub mod models;

/// Application constants organized by domain
pub mod constants;
