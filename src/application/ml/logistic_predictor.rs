use super::predictor::{Classifier, check_row_width};
use crate::domain::errors::ModelLoadError;
use crate::domain::ml::feature_registry::FeatureVector;
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

fn default_threshold() -> f64 {
    0.5
}

/// On-disk form of an exported binary logistic-regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub feature_names_in: Vec<String>,
    pub coef: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub version: Option<String>,
}

pub struct LogisticPredictor {
    feature_names: Vec<String>,
    weights: Array1<f64>,
    intercept: f64,
    threshold: f64,
    version: String,
}

impl LogisticPredictor {
    pub fn load(model_path: &Path) -> Result<Self, ModelLoadError> {
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound {
                path: model_path.to_path_buf(),
            });
        }

        let file = File::open(model_path).map_err(|source| ModelLoadError::Io {
            path: model_path.to_path_buf(),
            source,
        })?;

        let artifact: LogisticArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| ModelLoadError::Deserialize {
                path: model_path.to_path_buf(),
                source,
            })?;

        let predictor = Self::from_artifact(artifact)?;
        info!(
            "Successfully loaded logistic model from {:?} ({} features)",
            model_path,
            predictor.feature_names.len()
        );
        Ok(predictor)
    }

    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, ModelLoadError> {
        let invalid = |reason: String| ModelLoadError::InvalidArtifact { reason };

        if artifact.feature_names_in.is_empty() {
            return Err(invalid("feature_names_in is empty".to_string()));
        }
        if artifact.coef.len() != artifact.feature_names_in.len() {
            return Err(invalid(format!(
                "{} coefficients for {} features",
                artifact.coef.len(),
                artifact.feature_names_in.len()
            )));
        }

        let mut seen = HashSet::new();
        for name in &artifact.feature_names_in {
            if !seen.insert(name.as_str()) {
                return Err(invalid(format!("duplicate feature name '{}'", name)));
            }
        }

        if artifact.coef.iter().any(|w| !w.is_finite()) || !artifact.intercept.is_finite() {
            return Err(invalid("non-finite coefficient".to_string()));
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(invalid(format!(
                "threshold {} outside [0, 1]",
                artifact.threshold
            )));
        }

        Ok(Self {
            feature_names: artifact.feature_names_in,
            weights: Array1::from(artifact.coef),
            intercept: artifact.intercept,
            threshold: artifact.threshold,
            version: artifact.version.unwrap_or_else(|| "unversioned".to_string()),
        })
    }

    fn positive_probability(&self, row: &FeatureVector) -> Result<f64, String> {
        check_row_width(self.feature_names.len(), row)?;
        let x = ArrayView1::from(row.values());
        let z = self.weights.dot(&x) + self.intercept;
        let p = 1.0 / (1.0 + (-z).exp());
        if p.is_nan() {
            return Err("Probability is NaN".to_string());
        }
        Ok(p)
    }
}

impl Classifier for LogisticPredictor {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &FeatureVector) -> Result<u8, String> {
        let p = self.positive_probability(row)?;
        Ok(if p >= self.threshold { 1 } else { 0 })
    }

    fn predict_proba(&self, row: &FeatureVector) -> Result<[f64; 2], String> {
        let p = self.positive_probability(row)?;
        Ok([1.0 - p, p])
    }

    fn name(&self) -> &str {
        "Logistic Regression"
    }

    fn version(&self) -> &str {
        &self.version
    }
}
