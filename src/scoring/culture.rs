//! Four-quadrant culture profile scoring.
//!
//! This module reduces ipsative four-weight answers to a normalized
//! percentage profile over the clan/adhocracy/market/hierarchy quadrants,
//! with a dominant category and a validity flag.

use crate::models::{CultureAnswer, CultureCategory, CultureProfile, CultureScores};

/// The four percentages must sum to 100 within this margin for the profile
/// to be considered valid.
const VALIDITY_TOLERANCE: f64 = 0.5;

/// Score a batch of culture answers into a normalized profile.
///
/// Each quadrant's percentage is its weight sum across the batch divided
/// by the respondent count, rounded to 2 decimals. The dominant quadrant
/// is the first maximum in the fixed category order. Missing weights
/// contribute 0.
///
/// An empty batch substitutes a respondent count of 1, yielding an
/// all-zero profile that fails the validity check; no error is raised.
pub fn score_culture(answers: &[CultureAnswer]) -> CultureProfile {
    let n = answers.len().max(1);

    let mut profile = CultureScores::default();
    for category in CultureCategory::ALL {
        let sum: f64 = answers.iter().map(|a| a.weight(category)).sum();
        profile.set(category, round2(sum / n as f64));
    }

    let dominant = dominant_category(&profile);
    let valid = (profile.total() - 100.0).abs() < VALIDITY_TOLERANCE;

    CultureProfile {
        profile,
        dominant,
        n,
        valid,
    }
}

/// First category holding the maximum percentage, in the fixed order.
fn dominant_category(profile: &CultureScores) -> CultureCategory {
    let mut dominant = CultureCategory::Clan;

    for category in CultureCategory::ALL {
        if profile.get(category) > profile.get(dominant) {
            dominant = category;
        }
    }

    dominant
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
