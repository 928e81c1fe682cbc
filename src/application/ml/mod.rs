pub mod logistic_predictor;
#[cfg(feature = "onnx")]
pub mod onnx_predictor;
pub mod predictor;
pub mod stub_predictor;

pub use logistic_predictor::{LogisticArtifact, LogisticPredictor};
#[cfg(feature = "onnx")]
pub use onnx_predictor::OnnxPredictor;
pub use predictor::Classifier;
pub use stub_predictor::StubPredictor;

use crate::config::{ModelEnvConfig, ModelFormat};
use crate::domain::errors::ModelLoadError;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the process-wide classifier. Called once at startup; any error
/// here must stop the service before it accepts traffic.
pub fn load_classifier(config: &ModelEnvConfig) -> Result<Arc<dyn Classifier>, ModelLoadError> {
    info!(
        "Loading {:?} model from {:?}",
        config.format, config.path
    );

    let classifier: Arc<dyn Classifier> = match config.format {
        ModelFormat::Json => Arc::new(LogisticPredictor::load(&config.path)?),
        ModelFormat::Onnx => load_onnx(config)?,
        ModelFormat::Stub => {
            warn!(
                "Using stub classifier (p={}). Predictions are NOT model output.",
                config.stub_probability
            );
            Arc::new(StubPredictor::new(config.stub_probability))
        }
    };

    info!(
        "Model ready: {} {} with {} input columns",
        classifier.name(),
        classifier.version(),
        classifier.feature_names().len()
    );
    Ok(classifier)
}

#[cfg(feature = "onnx")]
fn load_onnx(config: &ModelEnvConfig) -> Result<Arc<dyn Classifier>, ModelLoadError> {
    Ok(Arc::new(OnnxPredictor::load(
        &config.path,
        config.features.clone(),
    )?))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_config: &ModelEnvConfig) -> Result<Arc<dyn Classifier>, ModelLoadError> {
    Err(ModelLoadError::UnsupportedFormat {
        format: "onnx".to_string(),
    })
}
