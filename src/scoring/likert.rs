//! Likert-scale aggregation.
//!
//! This module reduces a batch of dimension-tagged answers to
//! per-dimension descriptive statistics (mean, sample standard
//! deviation, count).

use crate::models::{DimensionStats, LikertAnswer, LikertScores};
use std::collections::BTreeMap;

/// Aggregate a batch of Likert answers into per-dimension statistics.
///
/// Answers are grouped by their dimension label; each group yields its
/// mean, sample standard deviation and count. `scale_max` is accepted for
/// compatibility and reserved for future range validation; it has no
/// effect on the computation.
///
/// Total over its input: an empty batch yields an empty dimensions map,
/// and no error condition exists.
pub fn aggregate_likert(answers: &[LikertAnswer], _scale_max: u32) -> LikertScores {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for answer in answers {
        groups
            .entry(answer.dimension.as_str())
            .or_default()
            .push(answer.value);
    }

    let dimensions = groups
        .into_iter()
        .map(|(dimension, values)| (dimension.to_string(), dimension_stats(&values)))
        .collect();

    LikertScores { dimensions }
}

/// Descriptive statistics for one group of raw values.
///
/// The standard deviation uses the n−1 divisor and is defined as 0 when
/// the group has a single value (avoids a division by zero, at the cost of
/// slightly misrepresenting single-sample variance).
fn dimension_stats(values: &[f64]) -> DimensionStats {
    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let std = if n > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    DimensionStats {
        mean: round3(mean),
        std: round3(std),
        n,
    }
}

/// Round to 3 decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(dimension: &str, value: f64) -> LikertAnswer {
        LikertAnswer {
            dimension: dimension.to_string(),
            value,
        }
    }

    #[test]
    fn test_empty_input_yields_no_dimensions() {
        let scores = aggregate_likert(&[], 5);
        assert!(scores.dimensions.is_empty());
    }

    #[test]
    fn test_counts_per_dimension() {
        let answers = vec![
            answer("Liderlik", 4.0),
            answer("Liderlik", 5.0),
            answer("Güven", 3.0),
        ];

        let scores = aggregate_likert(&answers, 5);

        assert_eq!(scores.dimensions.len(), 2);
        assert_eq!(scores.dimensions["Liderlik"].n, 2);
        assert_eq!(scores.dimensions["Güven"].n, 1);
    }

    #[test]
    fn test_mean_and_sample_std() {
        let answers = vec![
            answer("Trust", 3.0),
            answer("Trust", 4.0),
            answer("Trust", 5.0),
        ];

        let scores = aggregate_likert(&answers, 5);
        let stats = &scores.dimensions["Trust"];

        assert_eq!(stats.mean, 4.0);
        // Sample std of [3, 4, 5] is 1.0 (variance 1.0 with n−1 divisor).
        assert_eq!(stats.std, 1.0);
        assert_eq!(stats.n, 3);
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let answers = vec![answer("Trust", 1.0), answer("Trust", 2.0)];

        let stats = &aggregate_likert(&answers, 5).dimensions["Trust"];

        assert_eq!(stats.mean, 1.5);
        // Sample std of [1, 2] is sqrt(0.5) = 0.70710..., rounded to 0.707.
        assert_eq!(stats.std, 0.707);
    }

    #[test]
    fn test_single_record_has_zero_std() {
        let answers = vec![answer("A", 4.0), answer("B", 1.0), answer("C", 5.0)];

        let scores = aggregate_likert(&answers, 5);

        for stats in scores.dimensions.values() {
            assert_eq!(stats.std, 0.0);
            assert_eq!(stats.n, 1);
        }
    }

    #[test]
    fn test_scale_max_has_no_effect() {
        let answers = vec![answer("Trust", 4.0), answer("Trust", 7.0)];

        let five = aggregate_likert(&answers, 5);
        let seven = aggregate_likert(&answers, 7);

        assert_eq!(five.dimensions["Trust"], seven.dimensions["Trust"]);
    }

    #[test]
    fn test_defaulted_records_group_under_unknown() {
        // Records decoded from `{}` carry the "unknown" label and value 0.
        let answers: Vec<LikertAnswer> =
            serde_json::from_str(r#"[{}, {}, {"dimension": "Trust", "value": 4}]"#).unwrap();

        let scores = aggregate_likert(&answers, 5);

        assert_eq!(scores.dimensions["unknown"].n, 2);
        assert_eq!(scores.dimensions["unknown"].mean, 0.0);
        assert_eq!(scores.dimensions["Trust"].n, 1);
    }
}
