pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "modelo-demo"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Demo client for the Modelo wardrobe analysis API")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "http://localhost:8000"))]
    pub api_base_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "casual"))]
    pub occasion: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "mild"))]
    pub weather: String,

    /// 模擬延遲（毫秒）
    #[cfg_attr(feature = "cli", arg(long, default_value = "1000"))]
    pub latency_ms: u64,

    #[cfg_attr(feature = "cli", arg(long, default_value = "5"))]
    pub max_suggestions: usize,

    #[cfg_attr(feature = "cli", arg(long, default_value = "10"))]
    pub timeout_seconds: u64,

    /// Two colors to run through the compatibility check, e.g. "#FF0000,#00FF00"
    #[cfg_attr(feature = "cli", arg(long, value_delimiter = ','))]
    pub colors: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn demo_latency_ms(&self) -> u64 {
        self.latency_ms
    }

    fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base_url", &self.api_base_url)?;
        validation::validate_range("latency_ms", self.latency_ms, 0, 60_000)?;
        validation::validate_positive_number("max_suggestions", self.max_suggestions, 1)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;

        if !self.colors.is_empty() && self.colors.len() != 2 {
            return Err(crate::utils::error::DemoError::InvalidConfigValueError {
                field: "colors".to_string(),
                value: self.colors.join(","),
                reason: "Exactly two colors are required for a compatibility check".to_string(),
            });
        }

        Ok(())
    }
}
