// ABOUTME: Re-exports command modules for vitals-risk-cli
// ABOUTME: Provides local assessment, server probing, and rule table output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod assess;
pub mod probe;
pub mod rules;
