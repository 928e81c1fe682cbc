use crate::domain::ml::feature_registry::FeatureVector;

/// Interface for the pre-trained loan classifier.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, so every method takes `&self`.
pub trait Classifier: Send + Sync {
    /// Ordered input columns fixed at training time.
    fn feature_names(&self) -> &[String];

    /// Predicted class: 0 (default) or 1 (success).
    fn predict(&self, row: &FeatureVector) -> Result<u8, String>;

    /// Class probabilities `[p_class0, p_class1]`.
    fn predict_proba(&self, row: &FeatureVector) -> Result<[f64; 2], String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Rejects rows whose width disagrees with the declared schema.
pub(crate) fn check_row_width(expected: usize, row: &FeatureVector) -> Result<(), String> {
    if row.len() != expected {
        return Err(format!(
            "Feature count mismatch: model expects {}, got {}",
            expected,
            row.len()
        ));
    }
    Ok(())
}
