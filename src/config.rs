//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.cvfqa.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Chart settings.
    #[serde(default)]
    pub chart: ChartConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "cvfqa_report.md".to_string()
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the accreditation evidence table.
    #[serde(default = "default_true")]
    pub include_evidence: bool,

    /// Include the per-module Likert statistics tables.
    #[serde(default = "default_true")]
    pub include_likert: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_evidence: true,
            include_likert: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Radar chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Width and height of the (square) chart in pixels.
    #[serde(default = "default_chart_size")]
    pub size: u32,

    /// Series color for the current profile.
    #[serde(default = "default_current_color")]
    pub current_color: String,

    /// Series color for the preferred profile.
    #[serde(default = "default_preferred_color")]
    pub preferred_color: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: default_chart_size(),
            current_color: default_current_color(),
            preferred_color: default_preferred_color(),
        }
    }
}

fn default_chart_size() -> u32 {
    480
}

fn default_current_color() -> String {
    "#2E86AB".to_string()
}

fn default_preferred_color() -> String {
    "#E8A838".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".cvfqa.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; only
    /// explicitly provided values override.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.output, "cvfqa_report.md");
        assert!(config.report.include_evidence);
        assert_eq!(config.chart.size, 480);
        assert_eq!(config.chart.current_color, "#2E86AB");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
[general]
output = "custom_report.md"
verbose = true

[report]
include_evidence = false

[chart]
size = 640
current_color = "#123456"
"##;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "custom_report.md");
        assert!(config.general.verbose);
        assert!(!config.report.include_evidence);
        assert!(config.report.include_likert);
        assert_eq!(config.chart.size, 640);
        assert_eq!(config.chart.current_color, "#123456");
        assert_eq!(config.chart.preferred_color, "#E8A838");
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("[chart]"));
    }
}
