//! Loan prediction server
//!
//! Serves the pre-trained loan repayment classifier over HTTP.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=optimised_loan_success_model.json cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `BIND_ADDRESS` / `PORT` - Listen address (default: 0.0.0.0:5000)
//! - `MODEL_PATH` - Model artifact path
//! - `MODEL_FORMAT` - `json`, `onnx` or `stub` (default: json)
//! - `MODEL_FEATURES` - Column list for ONNX artifacts
//! - `STRICT_HTTP_STATUS` - Use 4xx/5xx for error payloads (default: false)

use anyhow::{Context, Result};
use loan_predict::application::inference_handler::InferenceHandler;
use loan_predict::application::ml::load_classifier;
use loan_predict::config::Config;
use loan_predict::interfaces::http::{AppState, create_router};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Loan Predict Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Bind={}, Model={:?} ({:?}), StrictStatus={}",
        config.server.bind_addr(),
        config.model.path,
        config.model.format,
        config.server.strict_http_status
    );

    // A model that cannot be loaded must keep the service from taking traffic.
    let classifier = load_classifier(&config.model).context("Failed to load model")?;

    let state = Arc::new(AppState::new(
        InferenceHandler::new(classifier),
        config.server.strict_http_status,
    ));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_addr()))?;
    info!("Listening on {}. Press Ctrl+C to shutdown.", config.server.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received. Exiting...");
        })
        .await
        .context("Server error")?;

    Ok(())
}
