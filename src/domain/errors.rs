use std::path::PathBuf;
use thiserror::Error;

/// Per-request failures of the prediction pipeline.
///
/// Every variant is turned into an `{"error": ...}` payload at the HTTP
/// boundary; none of them terminates the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Invalid value for {field}. Must be {expected}.")]
    InvalidInput {
        field: String,
        expected: &'static str,
    },

    #[error("Missing feature: {name}. Please include this in your input.")]
    MissingFeature { name: String },

    #[error("Invalid input: {reason}")]
    MalformedRequest { reason: String },

    #[error("Inference failed: {reason}")]
    InferenceFailure { reason: String },
}

impl PredictionError {
    pub fn not_a_number(field: &str) -> Self {
        PredictionError::InvalidInput {
            field: field.to_string(),
            expected: "a number",
        }
    }

    pub fn negative(field: &str) -> Self {
        PredictionError::InvalidInput {
            field: field.to_string(),
            expected: "a non-negative number",
        }
    }

    /// Stable identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::InvalidInput { .. } => "invalid_input",
            PredictionError::MissingFeature { .. } => "missing_feature",
            PredictionError::MalformedRequest { .. } => "malformed_request",
            PredictionError::InferenceFailure { .. } => "inference_failure",
        }
    }
}

/// Startup failures while loading the model artifact. Always fatal.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model {path:?}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid model artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("Model format '{format}' is not available in this build")]
    UnsupportedFormat { format: String },

    #[error("Model runtime error: {reason}")]
    Runtime { reason: String },
}
