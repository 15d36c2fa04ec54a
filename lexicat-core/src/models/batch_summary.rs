//! Aggregate statistics over one batch classification run.

use serde::{Deserialize, Serialize};

use super::classification::Classification;

/// Summary of a batch run: totals and the per-label assignment distribution,
/// suitable for a metrics strip or a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of records classified.
    pub total_records: usize,
    /// Records with at least one matched label.
    pub records_with_matches: usize,
    /// Total label assignments across all records (a record matching two
    /// labels contributes two).
    pub total_assignments: usize,
    /// Assignment count per label, in dictionary order. Labels with zero
    /// assignments are included so the distribution is stable across runs.
    pub label_counts: Vec<(String, usize)>,
}

impl BatchSummary {
    /// Aggregate `results` against the dictionary's label order.
    pub fn collect<'a, L>(label_order: L, results: &[Classification]) -> Self
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut label_counts: Vec<(String, usize)> = label_order
            .into_iter()
            .map(|l| (l.to_string(), 0))
            .collect();

        let mut records_with_matches = 0;
        let mut total_assignments = 0;
        for result in results {
            if !result.is_unclassified() {
                records_with_matches += 1;
            }
            for m in &result.matches {
                total_assignments += 1;
                if let Some(entry) = label_counts.iter_mut().find(|(l, _)| *l == m.label) {
                    entry.1 += 1;
                }
            }
        }

        Self {
            total_records: results.len(),
            records_with_matches,
            total_assignments,
            label_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classification::LabelMatch;

    fn result(labels: &[&str]) -> Classification {
        Classification {
            matches: labels
                .iter()
                .map(|l| LabelMatch {
                    label: l.to_string(),
                    keywords: vec!["kw".into()],
                })
                .collect(),
        }
    }

    #[test]
    fn test_collect_counts_in_label_order() {
        let results = vec![
            result(&["urgency", "discount"]),
            result(&["discount"]),
            Classification::unclassified(),
        ];
        let summary = BatchSummary::collect(["scarcity", "urgency", "discount"], &results);

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.records_with_matches, 2);
        assert_eq!(summary.total_assignments, 3);
        assert_eq!(
            summary.label_counts,
            vec![
                ("scarcity".to_string(), 0),
                ("urgency".to_string(), 1),
                ("discount".to_string(), 2),
            ]
        );
    }
}
