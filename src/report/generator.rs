//! Markdown report generation.
//!
//! This module generates campaign analytics reports from the assembled
//! scores, in Markdown or JSON.

use crate::config::ReportConfig;
use crate::models::{
    CampaignReport, CultureProfile, EvidenceRow, LikertScores, ReportMetadata,
};
use anyhow::Result;
use std::collections::BTreeMap;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &CampaignReport, options: &ReportConfig) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# CVF-QA Campaign Report\n\n");

    // Metadata section
    output.push_str(&generate_metadata_section(&report.metadata));

    // Culture profile
    output.push_str(&generate_culture_section(
        &report.culture,
        report.preferred.as_ref(),
    ));

    // Likert statistics per module
    if options.include_likert {
        output.push_str(&generate_likert_section(&report.likert));
    }

    // Accreditation evidence
    if options.include_evidence {
        output.push_str(&generate_evidence_section(&report.evidence));
    }

    // Footer
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Campaign:** {}\n", metadata.campaign));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Engine Version:** `{}`\n",
        metadata.engine_version
    ));
    section.push_str(&format!(
        "- **Culture Respondents:** {}\n",
        metadata.culture_respondents
    ));
    section.push_str(&format!(
        "- **Likert Modules Scored:** {}\n",
        metadata.modules_scored
    ));
    section.push_str(&format!("- **Evidence Gaps:** {}\n", metadata.evidence_gaps));
    section.push('\n');

    section
}

/// Generate the culture profile section.
fn generate_culture_section(
    culture: &CultureProfile,
    preferred: Option<&CultureProfile>,
) -> String {
    let mut section = String::new();

    section.push_str("## Culture Profile\n\n");

    match preferred {
        Some(preferred) => {
            section.push_str("| Quadrant | Mevcut % | Tercih % |\n");
            section.push_str("|:---|---:|---:|\n");
            for (category, value) in culture.profile.entries() {
                section.push_str(&format!(
                    "| {} | {:.2} | {:.2} |\n",
                    category,
                    value,
                    preferred.profile.get(category)
                ));
            }
        }
        None => {
            section.push_str("| Quadrant | Mevcut % |\n");
            section.push_str("|:---|---:|\n");
            for (category, value) in culture.profile.entries() {
                section.push_str(&format!("| {} | {:.2} |\n", category, value));
            }
        }
    }
    section.push('\n');

    section.push_str(&format!(
        "- **Dominant quadrant:** {} ({:.2}%)\n",
        culture.dominant,
        culture.profile.get(culture.dominant)
    ));
    if let Some(preferred) = preferred {
        section.push_str(&format!(
            "- **Preferred dominant quadrant:** {} ({:.2}%)\n",
            preferred.dominant,
            preferred.profile.get(preferred.dominant)
        ));
    }
    section.push_str(&format!(
        "- **Profile validity:** {}\n",
        validity_label(culture)
    ));
    section.push('\n');

    section
}

/// Human-readable validity verdict for a profile.
fn validity_label(profile: &CultureProfile) -> String {
    if profile.valid {
        "✅ percentages sum to 100".to_string()
    } else {
        format!(
            "⚠️ percentages sum to {:.2}, outside the ±0.5 tolerance",
            profile.profile.total()
        )
    }
}

/// Generate the Likert statistics section.
fn generate_likert_section(likert: &BTreeMap<String, LikertScores>) -> String {
    if likert.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Likert Statistics\n\n");

    for (module, scores) in likert {
        section.push_str(&format!("### {}\n\n", module));

        if scores.dimensions.is_empty() {
            section.push_str("No answers were recorded for this module.\n\n");
            continue;
        }

        section.push_str("| Dimension | Mean | Std | N |\n");
        section.push_str("|:---|---:|---:|---:|\n");
        for (dimension, stats) in &scores.dimensions {
            section.push_str(&format!(
                "| {} | {:.3} | {:.3} | {} |\n",
                dimension, stats.mean, stats.std, stats.n
            ));
        }
        section.push('\n');
    }

    section
}

/// Generate the accreditation evidence section.
fn generate_evidence_section(evidence: &[EvidenceRow]) -> String {
    let mut section = String::new();

    section.push_str("## Accreditation Evidence\n\n");
    section.push_str("| Criterion | Modules | Evidence | Available |\n");
    section.push_str("|:---|:---|:---|:---:|\n");

    for row in evidence {
        let mark = if row.data_available { "✅" } else { "❌" };
        section.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.criterion,
            row.modules.join(", "),
            row.evidence_type,
            mark
        ));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by cvfqa-analytics*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &CampaignReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
