// ABOUTME: Route module organization for the Vitals risk server HTTP endpoints
// ABOUTME: Health probes and the prediction endpoint, each as its own Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the Vitals risk server
//!
//! Each domain module exposes a `*Routes::routes()` constructor returning an
//! axum `Router`; [`crate::server`] merges them and applies middleware.

/// Health check and system status routes
pub mod health;
/// Risk prediction routes
pub mod predict;

pub use health::HealthRoutes;
pub use predict::PredictRoutes;
