use crate::application::ml::Classifier;
use crate::application::raw_input::RawInput;
use crate::domain::errors::PredictionError;
use crate::domain::loan::prediction::{CLASS_DEFAULT, CLASS_SUCCESS};
use crate::domain::loan::{Employment, PredictionResult};
use crate::domain::ml::feature_registry::EncodedFeatures;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Parse, validate, encode, infer, format. One call per request.
///
/// Holds nothing but a shared read-only classifier, so a single handler can
/// serve any number of concurrent requests.
#[derive(Clone)]
pub struct InferenceHandler {
    classifier: Arc<dyn Classifier>,
}

impl InferenceHandler {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn handle(&self, raw: RawInput) -> Result<PredictionResult, PredictionError> {
        let record = raw.into_applicant()?.merge_defaults();

        if let Employment::Unrecognized(value) = &record.employment {
            warn!(
                "Unrecognized employment type '{}': all employment indicators set to 0",
                value
            );
        }

        let row = EncodedFeatures::encode(&record).project(self.classifier.feature_names())?;
        debug!("Encoded row: {:?}", row.values());

        let prediction = self.classifier.predict(&row).map_err(inference_failure)?;
        let proba = self
            .classifier
            .predict_proba(&row)
            .map_err(inference_failure)?;

        if prediction != CLASS_DEFAULT && prediction != CLASS_SUCCESS {
            return Err(inference_failure(format!(
                "class {} is not a binary label",
                prediction
            )));
        }
        let success_probability = proba[1];
        if !(0.0..=1.0).contains(&success_probability) {
            return Err(inference_failure(format!(
                "probability {} outside [0, 1]",
                success_probability
            )));
        }

        Ok(PredictionResult::new(prediction, success_probability))
    }
}

fn inference_failure(reason: String) -> PredictionError {
    error!("Inference failed: {}", reason);
    PredictionError::InferenceFailure { reason }
}
