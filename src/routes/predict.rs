// ABOUTME: Prediction route handler turning a JSON biometric record into a risk assessment
// ABOUTME: Validates required fields and numeric types before handing off to RiskEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! `POST /predict` accepts one JSON object carrying all seven biometric fields.
//! Fields are checked in a fixed order and the first problem is reported.
//! Values outside their usual range are scored as-is and only logged. The
//! response echoes the request object exactly as received.

use crate::constants::{fields, paths};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::middleware::request_id_from_headers;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{Map, Value};
use vitals_core::models::{HealthInput, Prediction};
use vitals_intelligence::RiskEngine;

/// Largest magnitude at which every integer is exactly representable as `f64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Prediction routes implementation
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create prediction routes backed by `engine`
    pub fn routes(engine: RiskEngine) -> Router {
        Router::new()
            .route(paths::PREDICT, post(Self::handle_predict))
            .with_state(engine)
    }

    /// Handle `POST /predict`
    async fn handle_predict(
        State(engine): State<RiskEngine>,
        headers: HeaderMap,
        body: Result<Bytes, BytesRejection>,
    ) -> AppResult<Json<Prediction>> {
        let request_id = request_id_from_headers(&headers);

        let body = body.map_err(|rejection| body_rejection_error(&rejection))?;
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            AppError::invalid_input("Request body must be a JSON object").with_source(e)
        })?;
        let input = parse_health_input(&payload)?;

        AppLogger::log_prediction_input(&request_id, &input);
        AppLogger::log_out_of_range(&request_id, &input.out_of_range_fields());

        let prediction = engine.predict(input);
        AppLogger::log_prediction(
            &request_id,
            &prediction,
            prediction.detailed_risks.average_risk(),
        );

        Ok(Json(Prediction {
            input_data: payload,
            ..prediction
        }))
    }
}

/// Body-limit rejections keep their 413, anything else is unusable input
fn body_rejection_error(rejection: &BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(rejection.body_text())
    } else {
        AppError::invalid_input(rejection.body_text())
    }
}

/// Validate a decoded request body and build the engine input.
///
/// # Errors
///
/// - `INVALID_INPUT` when the body is not an object
/// - `MISSING_REQUIRED_FIELD` for the first absent field, in
///   [`fields::REQUIRED`] order
/// - `INVALID_FORMAT` when a present field is not a number, or the step
///   count is not a whole number
pub fn parse_health_input(payload: &Value) -> AppResult<HealthInput> {
    let Value::Object(map) = payload else {
        return Err(AppError::invalid_input("Request body must be a JSON object"));
    };

    if let Some(missing) = fields::REQUIRED
        .iter()
        .find(|field| !map.contains_key(**field))
    {
        return Err(AppError::missing_field(missing));
    }

    Ok(HealthInput {
        step_count: integer_field(map, fields::STEP_COUNT)?,
        calories: number_field(map, fields::CALORIES)?,
        total_sleep_minutes: number_field(map, fields::TOTAL_SLEEP_MINUTES)?,
        bmi: number_field(map, fields::BMI)?,
        heart_rate_bpm: number_field(map, fields::HEART_RATE_BPM)?,
        spo2: number_field(map, fields::SPO2)?,
        stress_level: number_field(map, fields::STRESS_LEVEL)?,
    })
}

fn type_error(field: &str, expected: &str) -> AppError {
    AppError::invalid_format(format!("Field {field} must be {expected}"))
        .with_details(serde_json::json!({ "field": field, "expected": expected }))
}

fn number_field(map: &Map<String, Value>, field: &str) -> AppResult<f64> {
    map.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| type_error(field, "a number"))
}

/// Whole numbers are accepted in either integer or float notation (`1000.0`)
fn integer_field(map: &Map<String, Value>, field: &str) -> AppResult<i64> {
    let value = map.get(field);

    if let Some(int) = value.and_then(Value::as_i64) {
        return Ok(int);
    }

    value
        .and_then(Value::as_f64)
        .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER)
        .map(|f| f as i64)
        .ok_or_else(|| type_error(field, "an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitals_core::errors::ErrorCode;

    fn full_body() -> Value {
        json!({
            "step_count": 1000,
            "calories": 800,
            "total_sleep_minutes": 120,
            "bmi": 34.5,
            "heart_rate_bpm": 95,
            "spo2": 88,
            "stress_level": 5
        })
    }

    #[test]
    fn test_parse_full_body() {
        let input = parse_health_input(&full_body()).unwrap();
        assert_eq!(input.step_count, 1000);
        assert!((input.bmi - 34.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_missing_field_reported() {
        let mut body = full_body();
        let map = body.as_object_mut().unwrap();
        map.remove("spo2");
        map.remove("calories");

        let error = parse_health_input(&body).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Missing required field: calories");
    }

    #[test]
    fn test_non_object_rejected() {
        let error = parse_health_input(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_string_value_rejected() {
        let mut body = full_body();
        body["bmi"] = json!("heavy");
        let error = parse_health_input(&body).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert_eq!(error.details["field"], "bmi");
    }

    #[test]
    fn test_step_count_accepts_whole_float_only() {
        let mut body = full_body();
        body["step_count"] = json!(1200.0);
        assert_eq!(parse_health_input(&body).unwrap().step_count, 1200);

        body["step_count"] = json!(1200.5);
        let error = parse_health_input(&body).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_null_value_is_a_type_error() {
        let mut body = full_body();
        body["stress_level"] = Value::Null;
        let error = parse_health_input(&body).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }
}
