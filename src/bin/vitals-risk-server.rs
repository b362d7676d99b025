// ABOUTME: Server binary for the Vitals health risk API
// ABOUTME: Loads environment configuration, initializes logging, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Vitals Risk Server Binary
//!
//! Starts the HTTP API that scores biometric records for the mobile client.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use vitals_risk_server::{
    config::environment::ServerConfig, constants::paths, logging, server::VitalsServer,
};

#[derive(Parser)]
#[command(name = "vitals-risk-server")]
#[command(about = "Vitals Risk API - rules-based health risk assessment")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    info!("Starting Vitals Risk API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    if let Err(e) = VitalsServer::new(config).run().await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("   Prediction:  POST {base}{}", paths::PREDICT);
    info!("   Liveness:    GET  {base}{}", paths::HEALTH);
    info!("   Readiness:   GET  {base}{}", paths::READY);
    info!("=== End of Endpoint List ===");
}
