// ABOUTME: Vitals CLI - command-line client for the health risk engine and API
// ABOUTME: Scores records locally, probes a running server, and dumps the rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Score a record locally with explicit readings (absent flags use defaults)
//! vitals-risk-cli assess --step-count 1000 --bmi 34.5 --spo2 88
//!
//! # Score a JSON record from a file and print the raw prediction
//! vitals-risk-cli assess --file record.json --json
//!
//! # Check a running server and submit the sample record
//! vitals-risk-cli probe --url http://localhost:5001
//!
//! # Print the risk point tables
//! vitals-risk-cli rules
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use vitals_core::constants::{defaults, service_names};
use vitals_core::models::HealthInput;

#[derive(Parser)]
#[command(
    name = "vitals-risk-cli",
    about = "Vitals Risk CLI",
    long_about = "Command-line client for the Vitals health risk engine: local assessment, server probing, and rule inspection."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Score a record locally without a server
    Assess {
        #[command(flatten)]
        reading: ReadingArgs,

        /// Read the record from a JSON file instead of flags
        #[arg(
            long,
            conflicts_with_all = [
                "step_count",
                "calories",
                "total_sleep_minutes",
                "bmi",
                "heart_rate_bpm",
                "spo2",
                "stress_level",
            ]
        )]
        file: Option<PathBuf>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a running server, then submit a record to it
    Probe {
        /// Server base URL
        #[arg(long, env = "VITALS_API_URL", default_value = "http://localhost:5001")]
        url: String,

        /// Record to submit (defaults to a high-risk sample)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the risk point tables as JSON
    Rules,
}

/// One biometric reading per flag
#[derive(Args)]
struct ReadingArgs {
    /// Daily step count
    #[arg(long)]
    step_count: Option<i64>,

    /// Daily calorie intake
    #[arg(long)]
    calories: Option<f64>,

    /// Total sleep in minutes
    #[arg(long)]
    total_sleep_minutes: Option<f64>,

    /// Body mass index
    #[arg(long)]
    bmi: Option<f64>,

    /// Heart rate in beats per minute
    #[arg(long)]
    heart_rate_bpm: Option<f64>,

    /// Blood oxygen saturation percentage
    #[arg(long)]
    spo2: Option<f64>,

    /// Stress level (1-10)
    #[arg(long)]
    stress_level: Option<f64>,
}

impl ReadingArgs {
    fn into_input(self) -> HealthInput {
        HealthInput {
            step_count: self.step_count.unwrap_or(defaults::STEP_COUNT),
            calories: self.calories.unwrap_or(defaults::CALORIES),
            total_sleep_minutes: self
                .total_sleep_minutes
                .unwrap_or(defaults::TOTAL_SLEEP_MINUTES),
            bmi: self.bmi.unwrap_or(defaults::BMI),
            heart_rate_bpm: self.heart_rate_bpm.unwrap_or(defaults::HEART_RATE_BPM),
            spo2: self.spo2.unwrap_or(defaults::SPO2),
            stress_level: self.stress_level.unwrap_or(defaults::STRESS_LEVEL),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    debug!("{} starting", service_names::VITALS_RISK_CLI);

    match cli.command {
        Command::Assess {
            reading,
            file,
            json,
        } => {
            let input = match file {
                Some(path) => helpers::input::read_input_file(&path)?,
                None => reading.into_input(),
            };
            commands::assess::run(input, json)?;
        }
        Command::Probe { url, file, json } => {
            let input = match file {
                Some(path) => helpers::input::read_input_file(&path)?,
                None => helpers::input::sample_input(),
            };
            commands::probe::run(&url, input, json).await?;
        }
        Command::Rules => commands::rules::run()?,
    }

    Ok(())
}
