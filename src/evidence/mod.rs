//! Accreditation criterion-to-evidence mapping.
//!
//! This module holds the fixed mapping from quality-assurance criteria to
//! the assessment modules whose results serve as evidence, and checks a
//! campaign's results for availability.

use crate::models::EvidenceRow;
use serde_json::Value;
use std::collections::HashMap;

/// One entry of the criterion-to-module mapping.
#[derive(Debug, Clone, Copy)]
pub struct CriterionMapping {
    /// Accreditation criterion identifier.
    pub criterion: &'static str,
    /// Module codes whose results are required as evidence.
    pub modules: &'static [&'static str],
    /// Human-readable description of the expected evidence.
    pub evidence: &'static str,
}

/// The hand-curated criterion table, in report order.
///
/// Immutable after initialization; safe to read from any thread without
/// synchronization.
pub static CRITERION_TABLE: &[CriterionMapping] = &[
    CriterionMapping {
        criterion: "A.1.4",
        modules: &["M2_QCI"],
        evidence: "Kalite kültürü envanter sonuçları",
    },
    CriterionMapping {
        criterion: "A.2.3",
        modules: &["M3_MSAI"],
        evidence: "360° liderlik yetkinlik değerlendirmesi",
    },
    CriterionMapping {
        criterion: "A.3.1",
        modules: &["M1_OCAI", "M6_SPU"],
        evidence: "Kültür profili ve stratejik plan uyum analizi",
    },
    CriterionMapping {
        criterion: "A.4.1",
        modules: &["M5_PKE"],
        evidence: "Paydaş katılım endeksi sonuçları",
    },
    CriterionMapping {
        criterion: "A.5",
        modules: &["M4_UWES"],
        evidence: "Çalışan bağlılığı ölçüm sonuçları",
    },
];

/// Build the evidence-availability table for a campaign.
///
/// Emits one row per criterion, in the table's declared order. A row is
/// available iff every required module code is a key of `campaign_results`;
/// the values are never inspected. A criterion requiring no modules
/// trivially reports available.
pub fn generate_evidence_table(campaign_results: &HashMap<String, Value>) -> Vec<EvidenceRow> {
    CRITERION_TABLE
        .iter()
        .map(|mapping| EvidenceRow {
            criterion: mapping.criterion.to_string(),
            modules: mapping.modules.iter().map(|m| m.to_string()).collect(),
            evidence_type: mapping.evidence.to_string(),
            data_available: mapping
                .modules
                .iter()
                .all(|m| campaign_results.contains_key(*m)),
        })
        .collect()
}
