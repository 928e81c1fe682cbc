use super::predictor::{Classifier, check_row_width};
use crate::domain::ml::feature_registry::{FeatureVector, default_schema};

/// Constant-output classifier for local development and tests.
///
/// Accepts the full canonical schema and returns the same probability for
/// every row.
pub struct StubPredictor {
    feature_names: Vec<String>,
    probability: f64,
}

impl StubPredictor {
    pub fn new(probability: f64) -> Self {
        Self {
            feature_names: default_schema(),
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Replaces the declared schema, e.g. to simulate a model trained on
    /// columns the encoder cannot produce.
    pub fn with_feature_names(mut self, feature_names: Vec<String>) -> Self {
        self.feature_names = feature_names;
        self
    }
}

impl Default for StubPredictor {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Classifier for StubPredictor {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &FeatureVector) -> Result<u8, String> {
        check_row_width(self.feature_names.len(), row)?;
        Ok(if self.probability >= 0.5 { 1 } else { 0 })
    }

    fn predict_proba(&self, row: &FeatureVector) -> Result<[f64; 2], String> {
        check_row_width(self.feature_names.len(), row)?;
        Ok([1.0 - self.probability, self.probability])
    }

    fn name(&self) -> &str {
        "Stub"
    }

    fn version(&self) -> &str {
        "v0"
    }
}
