use serde::{Deserialize, Serialize};

/// Class label the model emits for a successful repayment.
pub const CLASS_SUCCESS: u8 = 1;
/// Class label for default / non-success.
pub const CLASS_DEFAULT: u8 = 0;

/// Response payload of a successful prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub success_probability: f64,
}

impl PredictionResult {
    pub fn new(prediction: u8, success_probability: f64) -> Self {
        Self {
            prediction,
            success_probability: round_probability(success_probability),
        }
    }
}

/// Rounds to two decimals from the exact binary value, ties to even.
///
/// Scaling by 100 first can itself round (0.015 is stored just below the
/// tie but `0.015 * 100.0` is exactly 1.5), so the decimal formatter does
/// the rounding instead.
pub fn round_probability(p: f64) -> f64 {
    format!("{:.2}", p).parse().unwrap_or(p)
}
