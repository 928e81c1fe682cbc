//! Model artifact configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "optimised_loan_success_model.json";

/// Serialization format of the model artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Json,
    Onnx,
    Stub,
}

impl FromStr for ModelFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ModelFormat::Json),
            "onnx" => Ok(ModelFormat::Onnx),
            "stub" => Ok(ModelFormat::Stub),
            _ => anyhow::bail!(
                "Invalid MODEL_FORMAT: {}. Must be 'json', 'onnx', or 'stub'",
                s
            ),
        }
    }
}

/// Model environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    pub path: PathBuf,
    pub format: ModelFormat,
    /// Input column order for formats that do not carry one.
    pub features: Vec<String>,
    pub stub_probability: f64,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            format: ModelFormat::Json,
            features: Vec::new(),
            stub_probability: 0.5,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self::read(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses each variable on its own. Cross-field rules are left to
    /// `validate`, so callers can apply overrides in between.
    pub fn read(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let format = match lookup("MODEL_FORMAT") {
            Some(raw) => raw.parse::<ModelFormat>()?,
            None => defaults.format,
        };

        let features = lookup("MODEL_FEATURES")
            .map(|raw| parse_feature_list(&raw))
            .unwrap_or_default();

        let stub_probability = match lookup("STUB_PROBABILITY") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|p| (0.0..=1.0).contains(p))
                .with_context(|| format!("Invalid STUB_PROBABILITY: {}", raw))?,
            None => defaults.stub_probability,
        };

        Ok(Self {
            path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.path),
            format,
            features,
            stub_probability,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.format == ModelFormat::Onnx && self.features.is_empty() {
            anyhow::bail!("MODEL_FEATURES is required when MODEL_FORMAT=onnx");
        }
        Ok(())
    }
}

/// Splits a comma-separated column list. Names may contain spaces
/// ("EmploymentType_Self employed"), so only the edges are trimmed.
pub fn parse_feature_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
