//! Scores one applicant offline with the same pipeline the server uses.
//!
//! ```sh
//! echo '{"Amount": 10000, "Term": 60}' | cargo run --bin predict -- --model model.json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use loan_predict::application::inference_handler::InferenceHandler;
use loan_predict::application::ml::load_classifier;
use loan_predict::application::raw_input::RawInput;
use loan_predict::config::{ModelEnvConfig, ModelFormat, parse_feature_list};
use loan_predict::interfaces::http::ErrorResponse;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Applicant JSON document. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Artifact format: json, onnx or stub (overrides MODEL_FORMAT)
    #[arg(long)]
    format: Option<ModelFormat>,

    /// Comma-separated input columns for ONNX models (overrides MODEL_FEATURES)
    #[arg(long)]
    features: Option<String>,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut model_config = ModelEnvConfig::read(|key| std::env::var(key).ok())
        .context("Invalid model configuration")?;
    if let Some(path) = args.model {
        model_config.path = path;
    }
    if let Some(format) = args.format {
        model_config.format = format;
    }
    if let Some(features) = args.features.as_deref() {
        model_config.features = parse_feature_list(features);
    }
    model_config
        .validate()
        .context("Invalid model configuration")?;

    let classifier = load_classifier(&model_config).context("Failed to load model")?;
    let handler = InferenceHandler::new(classifier);

    let body = match &args.input {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {:?}", path))?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let outcome = RawInput::from_json_slice(&body).and_then(|raw| handler.handle(raw));
    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let payload = ErrorResponse {
                error: e.to_string(),
            };
            println!("{}", serde_json::to_string(&payload)?);
            Ok(ExitCode::from(2))
        }
    }
}
