//! Data models for the analytics engine.
//!
//! This module contains all the core data structures used throughout
//! the application for representing survey answers, scores, and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the four fixed culture quadrants of the competing values framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureCategory {
    /// Collaborative, family-like culture
    Clan,
    /// Dynamic, entrepreneurial culture
    Adhocracy,
    /// Results-oriented, competitive culture
    Market,
    /// Structured, process-driven culture
    Hierarchy,
}

impl CultureCategory {
    /// The four categories in their fixed declaration order.
    ///
    /// This order decides tie-breaking for the dominant category and the
    /// axis order of the radar chart.
    pub const ALL: [CultureCategory; 4] = [
        CultureCategory::Clan,
        CultureCategory::Adhocracy,
        CultureCategory::Market,
        CultureCategory::Hierarchy,
    ];

    /// The answer-sheet weight key this category is scored from.
    #[allow(dead_code)] // Utility accessor (decoding uses serde renames directly)
    pub fn weight_key(&self) -> &'static str {
        match self {
            CultureCategory::Clan => "A",
            CultureCategory::Adhocracy => "B",
            CultureCategory::Market => "C",
            CultureCategory::Hierarchy => "D",
        }
    }
}

impl fmt::Display for CultureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CultureCategory::Clan => write!(f, "clan"),
            CultureCategory::Adhocracy => write!(f, "adhocracy"),
            CultureCategory::Market => write!(f, "market"),
            CultureCategory::Hierarchy => write!(f, "hierarchy"),
        }
    }
}

/// A single ipsative culture answer: four weights distributed by one
/// respondent, expected (but not required per record) to sum to 100.
///
/// Missing weights decode to 0 rather than failing; scale validity is the
/// caller's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CultureAnswer {
    /// Weight assigned to the clan quadrant.
    #[serde(rename = "A", default)]
    pub a: f64,
    /// Weight assigned to the adhocracy quadrant.
    #[serde(rename = "B", default)]
    pub b: f64,
    /// Weight assigned to the market quadrant.
    #[serde(rename = "C", default)]
    pub c: f64,
    /// Weight assigned to the hierarchy quadrant.
    #[serde(rename = "D", default)]
    pub d: f64,
}

impl CultureAnswer {
    /// Returns the weight this respondent gave to a category.
    pub fn weight(&self, category: CultureCategory) -> f64 {
        match category {
            CultureCategory::Clan => self.a,
            CultureCategory::Adhocracy => self.b,
            CultureCategory::Market => self.c,
            CultureCategory::Hierarchy => self.d,
        }
    }
}

/// Normalized percentages over the four culture quadrants.
///
/// All four categories are always present, possibly zero, regardless of
/// which weight keys appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CultureScores {
    pub clan: f64,
    pub adhocracy: f64,
    pub market: f64,
    pub hierarchy: f64,
}

impl CultureScores {
    /// Returns the percentage for a category.
    pub fn get(&self, category: CultureCategory) -> f64 {
        match category {
            CultureCategory::Clan => self.clan,
            CultureCategory::Adhocracy => self.adhocracy,
            CultureCategory::Market => self.market,
            CultureCategory::Hierarchy => self.hierarchy,
        }
    }

    /// Sets the percentage for a category.
    pub fn set(&mut self, category: CultureCategory, value: f64) {
        match category {
            CultureCategory::Clan => self.clan = value,
            CultureCategory::Adhocracy => self.adhocracy = value,
            CultureCategory::Market => self.market = value,
            CultureCategory::Hierarchy => self.hierarchy = value,
        }
    }

    /// Category/percentage pairs in the fixed category order.
    pub fn entries(&self) -> [(CultureCategory, f64); 4] {
        [
            (CultureCategory::Clan, self.clan),
            (CultureCategory::Adhocracy, self.adhocracy),
            (CultureCategory::Market, self.market),
            (CultureCategory::Hierarchy, self.hierarchy),
        ]
    }

    /// Sum of the four percentages.
    pub fn total(&self) -> f64 {
        self.clan + self.adhocracy + self.market + self.hierarchy
    }
}

/// The computed four-quadrant culture profile for one answer batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultureProfile {
    /// Normalized percentage per quadrant.
    pub profile: CultureScores,
    /// Quadrant with the highest percentage (first wins on ties, in the
    /// fixed category order).
    pub dominant: CultureCategory,
    /// Number of respondents the profile was computed from.
    pub n: usize,
    /// True iff the four percentages sum to 100 within a 0.5 tolerance.
    pub valid: bool,
}

/// A single Likert-scale answer tagged with the dimension it measures.
///
/// A missing dimension decodes to `"unknown"` and a missing value to 0;
/// malformed records degrade instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikertAnswer {
    /// Free-form dimension label (e.g. "Liderlik").
    #[serde(default = "default_dimension")]
    pub dimension: String,
    /// Raw scale point. Range validity is the caller's concern.
    #[serde(default)]
    pub value: f64,
}

fn default_dimension() -> String {
    "unknown".to_string()
}

/// A batch of Likert answers for one assessment module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikertSurvey {
    /// The answer records of the batch.
    #[serde(default)]
    pub answers: Vec<LikertAnswer>,
    /// Upper bound of the response scale (e.g. 5 or 7). Accepted for
    /// compatibility; reserved for future range validation.
    #[serde(default = "default_scale_max")]
    pub scale_max: u32,
}

fn default_scale_max() -> u32 {
    5
}

/// Descriptive statistics for one dimension of a Likert batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionStats {
    /// Mean of the raw values, rounded to 3 decimals.
    pub mean: f64,
    /// Sample standard deviation (n−1 divisor), rounded to 3 decimals.
    /// Defined as 0 when n ≤ 1.
    pub std: f64,
    /// Number of answers carrying this dimension label.
    pub n: usize,
}

/// Aggregated Likert statistics, keyed by dimension label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikertScores {
    /// Per-dimension statistics for every distinct label seen in the input.
    pub dimensions: BTreeMap<String, DimensionStats>,
}

/// One row of the accreditation evidence table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRow {
    /// Accreditation criterion identifier (e.g. "A.3.1").
    pub criterion: String,
    /// Assessment modules required as evidence for this criterion.
    pub modules: Vec<String>,
    /// Human-readable description of the expected evidence.
    pub evidence_type: String,
    /// True iff every required module has results in this campaign.
    pub data_available: bool,
}

/// Metadata about a campaign report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Identifier of the scored campaign.
    pub campaign: String,
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Version of the analytics engine.
    pub engine_version: String,
    /// Number of culture respondents in the batch.
    pub culture_respondents: usize,
    /// Number of Likert modules scored.
    pub modules_scored: usize,
    /// Number of accreditation criteria without available evidence.
    pub evidence_gaps: usize,
}

/// The complete analytics report for one campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignReport {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Current culture profile.
    pub culture: CultureProfile,
    /// Preferred culture profile, when a preferred batch was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<CultureProfile>,
    /// Likert statistics per assessment module.
    pub likert: BTreeMap<String, LikertScores>,
    /// Accreditation evidence availability, in the fixed table order.
    pub evidence: Vec<EvidenceRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(CultureCategory::Clan.to_string(), "clan");
        assert_eq!(CultureCategory::Adhocracy.to_string(), "adhocracy");
        assert_eq!(CultureCategory::Market.to_string(), "market");
        assert_eq!(CultureCategory::Hierarchy.to_string(), "hierarchy");
    }

    #[test]
    fn test_category_weight_keys() {
        let keys: Vec<&str> = CultureCategory::ALL
            .iter()
            .map(|c| c.weight_key())
            .collect();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_culture_answer_defaults() {
        let answer: CultureAnswer = serde_json::from_str("{}").unwrap();
        assert_eq!(answer.a, 0.0);
        assert_eq!(answer.b, 0.0);
        assert_eq!(answer.c, 0.0);
        assert_eq!(answer.d, 0.0);
    }

    #[test]
    fn test_culture_answer_partial_decode() {
        let answer: CultureAnswer = serde_json::from_str(r#"{"A": 40, "C": 60}"#).unwrap();
        assert_eq!(answer.a, 40.0);
        assert_eq!(answer.b, 0.0);
        assert_eq!(answer.c, 60.0);
        assert_eq!(answer.weight(CultureCategory::Market), 60.0);
    }

    #[test]
    fn test_likert_answer_defaults() {
        let answer: LikertAnswer = serde_json::from_str("{}").unwrap();
        assert_eq!(answer.dimension, "unknown");
        assert_eq!(answer.value, 0.0);
    }

    #[test]
    fn test_likert_survey_default_scale() {
        let survey: LikertSurvey =
            serde_json::from_str(r#"{"answers": [{"dimension": "Trust", "value": 4}]}"#).unwrap();
        assert_eq!(survey.scale_max, 5);
        assert_eq!(survey.answers.len(), 1);
    }

    #[test]
    fn test_scores_entries_cover_all_categories() {
        let scores = CultureScores {
            clan: 25.0,
            adhocracy: 25.0,
            market: 25.0,
            hierarchy: 25.0,
        };
        let entries = scores.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].0, CultureCategory::Clan);
        assert_eq!(entries[3].0, CultureCategory::Hierarchy);
        assert_eq!(scores.total(), 100.0);
    }

    #[test]
    fn test_scores_set_and_get() {
        let mut scores = CultureScores::default();
        scores.set(CultureCategory::Market, 42.5);
        assert_eq!(scores.get(CultureCategory::Market), 42.5);
        assert_eq!(scores.get(CultureCategory::Clan), 0.0);
    }
}
