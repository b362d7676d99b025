// ABOUTME: Helper modules for vitals-risk-cli
// ABOUTME: Input loading and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
