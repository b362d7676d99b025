// ABOUTME: HTTP server assembly: route merging, middleware stack, and graceful shutdown
// ABOUTME: Binds the configured address and serves until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use crate::errors::AppError;
use crate::middleware::{
    propagate_request_id_layer, request_trace_layer, set_request_id_layer, setup_cors,
    with_error_boundary,
};
use crate::routes::{HealthRoutes, PredictRoutes};
use anyhow::{Context, Result};
use axum::http::Uri;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use vitals_intelligence::RiskEngine;

/// The risk API server
pub struct VitalsServer {
    config: ServerConfig,
    engine: RiskEngine,
}

impl VitalsServer {
    /// Create a server whose engine uses `config.engine`
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let engine = RiskEngine::with_config(config.engine);
        Self { config, engine }
    }

    /// Server configuration
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the complete router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(&self.config, self.engine)
    }

    /// Bind and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!("HTTP server listening on {}", address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Merge all routes and wrap them in the middleware stack.
///
/// Outermost first: request id assignment, tracing, request id propagation,
/// CORS, then the error boundary (panic catcher, timeout, body limit).
pub fn build_router(config: &ServerConfig, engine: RiskEngine) -> Router {
    let routes = Router::new()
        .merge(HealthRoutes::routes())
        .merge(PredictRoutes::routes(engine))
        .fallback(handle_not_found);

    with_error_boundary(
        routes,
        config.request_timeout(),
        config.max_request_body_bytes,
    )
    .layer(setup_cors(config))
    .layer(propagate_request_id_layer())
    .layer(request_trace_layer())
    .layer(set_request_id_layer())
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
