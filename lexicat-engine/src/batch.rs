//! Batch classification: order-preserving fan-out over a column of texts.
//!
//! Records are independent and the snapshot (plus its compiled automaton) is
//! immutable for the duration of the batch, so large batches fan out across
//! cores with no locking. Small batches stay sequential — the rayon dispatch
//! overhead isn't worth it below the configured threshold.

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use lexicat_core::models::{BatchSummary, Classification, ClassifyMode, LabelMatch, MatchPolicy};

use crate::classifier::{self, Classifier};
use crate::dictionary::DictionarySnapshot;

/// One classified record, flattened for tabular output. Field order mirrors
/// the output columns: primary label, joined label set, keyword evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// Position of the record in the input batch.
    pub index: usize,
    /// Primary label, absent when nothing matched.
    pub primary: Option<String>,
    /// All matched labels, semicolon-joined, empty when nothing matched.
    pub labels: String,
    /// The mode-selected projection (primary or joined labels).
    pub rendered: Option<String>,
    /// Per-label matched-keyword evidence in dictionary order.
    pub evidence: Vec<LabelMatch>,
}

impl BatchRow {
    fn new(index: usize, classification: Classification, mode: ClassifyMode) -> Self {
        Self {
            index,
            primary: classification.primary().map(str::to_string),
            labels: classification.joined_labels(";"),
            rendered: classification.render(mode),
            evidence: classification.matches,
        }
    }
}

/// Classify every text in the batch against one snapshot. Output order
/// always equals input order; absent cells produce unclassified rows.
pub fn classify_batch(
    classifier: &Classifier,
    texts: &[Option<String>],
    snapshot: &DictionarySnapshot,
    policy: Option<MatchPolicy>,
    mode: ClassifyMode,
) -> Vec<BatchRow> {
    let policy = policy.unwrap_or_else(|| snapshot.match_policy());

    // Pin the automaton once for the whole batch instead of hitting the
    // cache per record.
    let automaton = match classifier.automaton(snapshot) {
        Ok(a) => Some(a),
        Err(e) => {
            warn!(error = %e, "automaton build failed, batch falls back to direct scan");
            None
        }
    };
    let classify_one = |index: usize, text: Option<&str>| {
        let classification = match &automaton {
            Some(a) => a.classify(text, policy),
            None => classifier::classify(text, snapshot, Some(policy)),
        };
        BatchRow::new(index, classification, mode)
    };

    if texts.len() >= classifier.parallel_threshold() {
        texts
            .par_iter()
            .enumerate()
            .map(|(index, text)| classify_one(index, text.as_deref()))
            .collect()
    } else {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| classify_one(index, text.as_deref()))
            .collect()
    }
}

/// Aggregate a finished batch into summary statistics, using the snapshot's
/// label order for the distribution.
pub fn summarize(snapshot: &DictionarySnapshot, rows: &[BatchRow]) -> BatchSummary {
    let results: Vec<Classification> = rows
        .iter()
        .map(|row| Classification {
            matches: row.evidence.clone(),
        })
        .collect();
    BatchSummary::collect(snapshot.labels(), &results)
}
