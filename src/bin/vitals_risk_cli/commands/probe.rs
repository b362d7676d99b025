// ABOUTME: Server probe command for vitals-risk-cli
// ABOUTME: Calls GET /health then POST /predict against a running server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Context, Result};
use std::time::Duration;
use tracing::{debug, info};
use vitals_core::errors::ErrorResponse;
use vitals_core::models::{HealthInput, Prediction};
use vitals_risk_server::constants::paths;

use crate::helpers::display::{display_prediction, print_json};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probe the server at `base_url` and submit `input`
pub async fn run(base_url: &str, input: HealthInput, json: bool) -> Result<()> {
    let base_url = base_url.trim_end_matches('/');
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    let health: serde_json::Value = client
        .get(format!("{base_url}{}", paths::HEALTH))
        .send()
        .await
        .with_context(|| format!("Server at {base_url} is unreachable"))?
        .error_for_status()
        .context("Health check failed")?
        .json()
        .await
        .context("Health check returned invalid JSON")?;

    info!("Health check: {}", health);
    if !json {
        println!(
            "Server: {} ({})",
            health["status"].as_str().unwrap_or("unknown"),
            health["message"].as_str().unwrap_or_default()
        );
    }

    let response = client
        .post(format!("{base_url}{}", paths::PREDICT))
        .json(&input)
        .send()
        .await
        .context("Prediction request failed")?;

    let status = response.status();
    debug!("POST {} -> {}", paths::PREDICT, status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => bail!(
                "Prediction rejected ({status}): {:?} {}",
                error.error.code,
                error.error.message
            ),
            Err(_) => bail!("Prediction failed ({status}): {body}"),
        }
    }

    let prediction: Prediction = response
        .json()
        .await
        .context("Prediction response was not a valid prediction")?;

    if json {
        print_json(&prediction)
    } else {
        display_prediction(&prediction);
        Ok(())
    }
}
