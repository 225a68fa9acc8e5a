//! cvfqa - Survey Analytics Engine
//!
//! A CLI tool that scores raw survey responses from an
//! organizational-assessment campaign into culture profiles and
//! per-dimension Likert statistics, and maps assessment modules to
//! accreditation evidence requirements.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (input, config, write failure, etc.)
//!   2 - Evidence gaps found with --fail-on-missing-evidence

mod chart;
mod cli;
mod config;
mod evidence;
mod input;
mod models;
mod report;
mod scoring;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use input::CampaignInput;
use models::{CampaignReport, ReportMetadata};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        match handle_init_config() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("\n❌ Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging(&args);

    info!("cvfqa v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis
    match run_analysis(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .cvfqa.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".cvfqa.toml");

    if path.exists() {
        eprintln!("⚠️  .cvfqa.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .cvfqa.toml")?;

    println!("✅ Created .cvfqa.toml with default settings.");
    println!("   Edit it to customize output, report sections, and chart colors.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow. Returns exit code (0 or 2).
fn run_analysis(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load the campaign input
    let input_path = args.input.clone().unwrap_or_default();
    println!("📥 Loading campaign input: {}", input_path.display());

    let campaign = input::load_campaign_input(&input_path)
        .context("Failed to load campaign input")?;
    info!(
        "Campaign '{}': {} culture respondents, {} likert batches",
        campaign.campaign,
        campaign.culture.len(),
        campaign.likert.len()
    );

    // Handle --dry-run: decode input and exit
    if args.dry_run {
        return handle_dry_run(&campaign);
    }

    // Step 2: Feed each batch to its scorer
    println!("🧮 Scoring answer batches...");

    let culture = scoring::score_culture(&campaign.culture);
    let preferred = if campaign.culture_preferred.is_empty() {
        None
    } else {
        Some(scoring::score_culture(&campaign.culture_preferred))
    };

    let mut likert = BTreeMap::new();
    for (module, survey) in &campaign.likert {
        let scale_max = args.scale_max.unwrap_or(survey.scale_max);
        debug!("Scoring {} ({} answers)", module, survey.answers.len());
        likert.insert(
            module.clone(),
            scoring::aggregate_likert(&survey.answers, scale_max),
        );
    }

    // Step 3: Check evidence availability
    let campaign_results = campaign.resolve_campaign_results();
    let evidence = evidence::generate_evidence_table(&campaign_results);
    let gaps = evidence.iter().filter(|r| !r.data_available).count();

    // Step 4: Assemble the report
    println!("\n📝 Generating report...");

    let metadata = ReportMetadata {
        campaign: campaign.campaign.clone(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        culture_respondents: campaign.culture.len(),
        modules_scored: likert.len(),
        evidence_gaps: gaps,
    };

    let report = CampaignReport {
        metadata,
        culture,
        preferred,
        likert,
        evidence,
    };

    // Step 5: Write the report (and chart, if requested)
    let output_path = PathBuf::from(&config.general.output);
    let content = match args.format {
        OutputFormat::Markdown => report::generate_markdown_report(&report, &config.report),
        OutputFormat::Json => report::generate_json_report(&report)?,
    };

    std::fs::write(&output_path, &content)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    if let Some(ref chart_path) = args.chart {
        let style = chart::RadarStyle::from(&config.chart);
        let svg = chart::render_radar_chart(
            &report.culture.profile,
            report.preferred.as_ref().map(|p| &p.profile),
            &style,
        );
        std::fs::write(chart_path, &svg)
            .with_context(|| format!("Failed to write chart to {}", chart_path.display()))?;
        println!("📈 Radar chart saved to: {}", chart_path.display());
    }

    // Print summary
    println!("\n📊 Campaign Summary:");
    println!(
        "   Dominant culture: {} ({:.2}%)",
        report.culture.dominant,
        report.culture.profile.get(report.culture.dominant)
    );
    println!(
        "   Profile valid: {}",
        if report.culture.valid { "yes" } else { "no" }
    );
    println!("   Likert modules scored: {}", report.likert.len());
    println!(
        "   Evidence available: {}/{}",
        report.evidence.len() - gaps,
        report.evidence.len()
    );
    println!(
        "\n✅ Analysis complete! Report saved to: {}",
        output_path.display()
    );

    // Check --fail-on-missing-evidence threshold
    if args.fail_on_missing_evidence && gaps > 0 {
        eprintln!(
            "\n⛔ {} accreditation criteria lack evidence. Failing (exit code 2).",
            gaps
        );
        return Ok(2);
    }

    Ok(0)
}

/// Handle --dry-run: decode the input, print what would be scored, exit.
fn handle_dry_run(campaign: &CampaignInput) -> Result<i32> {
    println!("\n🔍 Dry run: decoding input (no report written)...\n");

    println!("   Culture batch: {} respondents", campaign.culture.len());
    if campaign.culture_preferred.is_empty() {
        println!("   Preferred batch: absent");
    } else {
        println!(
            "   Preferred batch: {} respondents",
            campaign.culture_preferred.len()
        );
    }

    if campaign.likert.is_empty() {
        println!("   No Likert batches found.");
    } else {
        println!("   Likert batches: {}", campaign.likert.len());
        for (module, survey) in &campaign.likert {
            println!(
                "     📄 {} ({} answers, scale 1–{})",
                module,
                survey.answers.len(),
                survey.scale_max
            );
        }
    }

    let results = campaign.resolve_campaign_results();
    match campaign.campaign_results {
        Some(_) => println!("   Campaign results: supplied ({} modules)", results.len()),
        None => println!(
            "   Campaign results: derived from batches ({} modules)",
            results.len()
        ),
    }

    println!("\n✅ Dry run complete. No report was written.");
    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .cvfqa.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
