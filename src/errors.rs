// ABOUTME: Unified error handling for the HTTP layer
// ABOUTME: Re-exports AppError and the JSON error envelope from vitals-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Errors returned by route handlers.
//!
//! `AppError` implements `IntoResponse`, so handlers return
//! `AppResult<Json<T>>` and every rejection renders as
//! `{"error": {"code", "message", "details"?}}`.

pub use vitals_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
