use super::predictor::{Classifier, check_row_width};
use crate::domain::errors::ModelLoadError;
use crate::domain::ml::feature_registry::FeatureVector;
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Binary classifier exported to ONNX with the label as the first output
/// and a `[1, 2]` probability tensor as the second (no ZipMap).
pub struct OnnxPredictor {
    // Session::run needs exclusive access; the lock is held for one row.
    session: Mutex<Session>,
    feature_names: Vec<String>,
}

impl OnnxPredictor {
    pub fn load(model_path: &Path, feature_names: Vec<String>) -> Result<Self, ModelLoadError> {
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound {
                path: model_path.to_path_buf(),
            });
        }
        if feature_names.is_empty() {
            return Err(ModelLoadError::InvalidArtifact {
                reason: "ONNX models need MODEL_FEATURES to name their input columns".to_string(),
            });
        }

        let session = Session::builder()
            .map_err(|e| ModelLoadError::Runtime {
                reason: format!("Failed to create ONNX session builder: {}", e),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ModelLoadError::Runtime {
                reason: format!("Failed to load ONNX model: {}", e),
            })?;

        info!(
            "Successfully loaded ONNX model from {:?} ({} features)",
            model_path,
            feature_names.len()
        );

        Ok(Self {
            session: Mutex::new(session),
            feature_names,
        })
    }

    fn run(&self, row: &FeatureVector) -> Result<(u8, [f64; 2]), String> {
        check_row_width(self.feature_names.len(), row)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Mutex lock failed: {}", e))?;

        let shape = vec![1, row.len()];
        let input_value = ort::value::Value::from_array((shape.as_slice(), row.to_f32_vec()))
            .map_err(|e| format!("Input value creation failed: {}", e))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| e.to_string())?;

        let mut iter = outputs.iter();
        let (_, label_value) = iter.next().ok_or("No label output found")?;
        let (_, proba_value) = iter.next().ok_or("No probability output found")?;

        let labels = label_value
            .try_extract_tensor::<i64>()
            .map_err(|e| e.to_string())?;
        let label = *labels.1.first().ok_or("Empty label output")?;

        let proba = proba_value
            .try_extract_tensor::<f32>()
            .map_err(|e| e.to_string())?;
        let [p0, p1] = match proba.1 {
            [p0, p1, ..] => [*p0 as f64, *p1 as f64],
            _ => return Err("Probability output has fewer than 2 classes".to_string()),
        };

        let class = u8::try_from(label).map_err(|_| format!("Unexpected class label {}", label))?;
        Ok((class, [p0, p1]))
    }
}

impl Classifier for OnnxPredictor {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &FeatureVector) -> Result<u8, String> {
        self.run(row).map(|(class, _)| class)
    }

    fn predict_proba(&self, row: &FeatureVector) -> Result<[f64; 2], String> {
        self.run(row).map(|(_, proba)| proba)
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v1"
    }
}
