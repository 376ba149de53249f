//! Configuration management

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service root all endpoint paths are resolved against
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Output format
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(anyhow!(
                "Unknown output format '{}'. Use table, json or compact",
                other
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("BGPVIEW_BASE_URL").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }

        if let Some(timeout) = lookup("BGPVIEW_TIMEOUT").filter(|v| !v.is_empty()) {
            config.timeout = parse_timeout(&timeout).context("Invalid BGPVIEW_TIMEOUT")?;
        }

        if let Some(format) = lookup("BGPVIEW_OUTPUT_FORMAT").filter(|v| !v.is_empty()) {
            config.output_format =
                OutputFormat::parse(&format).context("Invalid BGPVIEW_OUTPUT_FORMAT")?;
        }

        Ok(config)
    }
}

/// Parse a timeout given in whole or fractional seconds
pub fn parse_timeout(value: &str) -> Result<Duration> {
    let secs: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a number of seconds", value))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(anyhow!("Timeout must be greater than 0, got '{}'", value));
    }

    Ok(Duration::from_secs_f64(secs))
}
