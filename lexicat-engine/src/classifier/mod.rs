//! Classification: which labels apply to a text, in what priority, with
//! which keywords as evidence.
//!
//! [`classify`] is the reference path: a direct scan of every keyword
//! against the text, pure in `(text, snapshot, policy)`. [`Classifier`]
//! wraps the same semantics behind the compiled automaton and its cache for
//! batch throughput; the two are observably identical.

pub mod automaton;
pub mod cache;

use tracing::warn;

use lexicat_core::config::EngineConfig;
use lexicat_core::models::{Classification, LabelMatch, MatchPolicy};

pub use automaton::KeywordAutomaton;
pub use cache::AutomatonCache;

use crate::dictionary::DictionarySnapshot;

/// Classify one text against one dictionary snapshot by direct scan.
///
/// `policy` overrides the snapshot's match policy when given. Absent text
/// (a missing cell in a real input table) yields the unclassified result —
/// first-class, not an error. Matching is case-insensitive; every matching
/// keyword of every matching label is recorded, labels in dictionary order,
/// keywords in insertion order.
pub fn classify(
    text: Option<&str>,
    snapshot: &DictionarySnapshot,
    policy: Option<MatchPolicy>,
) -> Classification {
    let text = match text {
        Some(t) => t,
        None => return Classification::unclassified(),
    };
    let policy = policy.unwrap_or_else(|| snapshot.match_policy());
    let folded = text.to_lowercase();

    let mut matches = Vec::new();
    for entry in snapshot.entries() {
        let keywords: Vec<String> = entry
            .keywords
            .iter()
            .filter(|kw| keyword_matches(&folded, &kw.to_lowercase(), policy))
            .cloned()
            .collect();
        if !keywords.is_empty() {
            matches.push(LabelMatch {
                label: entry.name.clone(),
                keywords,
            });
        }
    }

    Classification { matches }
}

/// Whether a folded keyword occurs in the folded text under `policy`.
///
/// Word-boundary must visit every occurrence, including ones that overlap a
/// rejected earlier occurrence, so the scan re-searches one character past
/// each hit instead of using non-overlapping `match_indices`.
fn keyword_matches(folded_text: &str, folded_keyword: &str, policy: MatchPolicy) -> bool {
    match policy {
        MatchPolicy::Substring => folded_text.contains(folded_keyword),
        MatchPolicy::WordBoundary => {
            let mut from = 0;
            while let Some(offset) = folded_text[from..].find(folded_keyword) {
                let start = from + offset;
                let end = start + folded_keyword.len();
                if automaton::occurrence_allowed(folded_text, start, end, policy) {
                    return true;
                }
                let step = folded_text[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                from = start + step;
            }
            false
        }
    }
}

/// The throughput path: classification through the compiled automaton,
/// memoized per snapshot. Falls back to the direct scan if the automaton
/// cannot be built, so the public contract never fails.
pub struct Classifier {
    cache: AutomatonCache,
    parallel_threshold: usize,
}

impl Classifier {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            cache: AutomatonCache::new(config.effective_automaton_cache_capacity()),
            parallel_threshold: config.effective_parallel_threshold(),
        }
    }

    /// A classifier with default cache capacity and an explicit batch
    /// fan-out threshold.
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        Self::new(&EngineConfig {
            parallel_threshold: Some(threshold),
            ..EngineConfig::default()
        })
    }

    /// Batch size at which [`crate::batch::classify_batch`] fans out.
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Same contract as the free [`classify`].
    pub fn classify(
        &self,
        text: Option<&str>,
        snapshot: &DictionarySnapshot,
        policy: Option<MatchPolicy>,
    ) -> Classification {
        match self.cache.get_or_build(snapshot) {
            Ok(automaton) => {
                automaton.classify(text, policy.unwrap_or_else(|| snapshot.match_policy()))
            }
            Err(e) => {
                warn!(error = %e, "automaton build failed, falling back to direct scan");
                classify(text, snapshot, policy)
            }
        }
    }

    /// The automaton for a snapshot, for callers that want to drive their
    /// own batch loop against a pinned matcher.
    pub fn automaton(
        &self,
        snapshot: &DictionarySnapshot,
    ) -> Result<std::sync::Arc<KeywordAutomaton>, aho_corasick::BuildError> {
        self.cache.get_or_build(snapshot)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
