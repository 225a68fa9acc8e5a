//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// cvfqa - Survey analytics engine for organizational assessments
///
/// Score a campaign's raw survey responses into culture profiles and
/// per-dimension Likert statistics, and map assessment modules to the
/// accreditation evidence they support. Markdown/JSON reports.
///
/// Examples:
///   cvfqa --input campaign.json
///   cvfqa --input campaign.json --format json --output scores.json
///   cvfqa --input campaign.json --chart radar.svg
///   cvfqa --input campaign.json --dry-run
///   cvfqa --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Campaign input file (JSON)
    ///
    /// Holds the campaign's raw answer batches: a culture batch, an
    /// optional preferred-culture batch, Likert batches keyed by module
    /// code, and optionally the campaign-results mapping.
    #[arg(short, long, value_name = "FILE", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// If not specified, falls back to the config file setting
    /// (default: cvfqa_report.md).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Write a radar chart of the culture profile to this SVG file
    #[arg(long, value_name = "FILE")]
    pub chart: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .cvfqa.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the Likert response scale upper bound for every batch
    ///
    /// Accepted for compatibility; reserved for future range validation.
    /// Can also be set per batch in the input file (default 5).
    #[arg(long, value_name = "N", env = "CVFQA_SCALE_MAX")]
    pub scale_max: Option<u32>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Dry run: load and decode the input without scoring or writing
    ///
    /// Shows which batches would be scored and exits.
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .cvfqa.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Fail if any accreditation criterion lacks available evidence
    ///
    /// Useful for readiness checks in CI. Exit code 2 when a gap is found.
    #[arg(long)]
    pub fail_on_missing_evidence: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        match self.input {
            Some(ref input) => {
                if !input.exists() {
                    return Err(format!("Input file does not exist: {}", input.display()));
                }
                if !input.is_file() {
                    return Err(format!("Input path is not a file: {}", input.display()));
                }
            }
            None => {
                return Err("An input file is required".to_string());
            }
        }

        // A Likert scale needs at least two points
        if let Some(scale_max) = self.scale_max {
            if scale_max < 2 {
                return Err("Scale max must be at least 2".to_string());
            }
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
