//! Configuration module for the loan prediction service.
//!
//! Configuration is read from environment variables (optionally seeded from
//! a `.env` file by the binaries) and grouped by concern: Server and Model.

mod model_config;
mod server_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig, ModelFormat, parse_feature_list};
pub use server_config::ServerEnvConfig;

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary key source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server =
            ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;
        let model = ModelEnvConfig::from_lookup(&lookup).context("Failed to load model config")?;
        Ok(Self { server, model })
    }
}
