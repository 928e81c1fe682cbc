//! HTTP server configuration parsing from environment variables.

use anyhow::{Context, Result};

/// HTTP server environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
    /// Map error payloads to 4xx/5xx instead of answering 200.
    pub strict_http_status: bool,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            strict_http_status: false,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: match lookup("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .with_context(|| format!("Invalid PORT: {}", raw))?,
                None => defaults.port,
            },
            strict_http_status: match lookup("STRICT_HTTP_STATUS") {
                Some(raw) => raw
                    .to_lowercase()
                    .parse::<bool>()
                    .with_context(|| format!("Invalid STRICT_HTTP_STATUS: {}", raw))?,
                None => defaults.strict_http_status,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
