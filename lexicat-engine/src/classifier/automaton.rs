//! Multi-pattern keyword matcher: the full keyword set compiled into a
//! single Aho-Corasick automaton, one overlapping pass per text.
//!
//! Each pattern index maps back to its (label, keyword) owner, so a scan
//! yields all keyword hits at once and the hits are grouped back to labels
//! in dictionary order. Observable semantics are identical to scanning each
//! keyword individually; only the cost changes.

use aho_corasick::{AhoCorasick, BuildError};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use lexicat_core::models::{Classification, LabelMatch, MatchPolicy};

use crate::dictionary::DictionarySnapshot;

/// A compiled keyword automaton tied to one dictionary snapshot.
/// Immutable after build; safe to share across classification workers.
pub struct KeywordAutomaton {
    automaton: AhoCorasick,
    /// Mapping from pattern index to (label index, keyword index).
    pattern_map: Vec<(usize, usize)>,
    snapshot: DictionarySnapshot,
}

impl KeywordAutomaton {
    /// Compile all keywords of all labels into a single automaton.
    /// Keywords are case-folded at build time; texts are folded per scan.
    pub fn build(snapshot: &DictionarySnapshot) -> Result<Self, BuildError> {
        let mut patterns = Vec::new();
        let mut pattern_map = Vec::new();

        for (label_idx, entry) in snapshot.entries().iter().enumerate() {
            for (keyword_idx, keyword) in entry.keywords.iter().enumerate() {
                patterns.push(keyword.to_lowercase());
                pattern_map.push((label_idx, keyword_idx));
            }
        }

        let automaton = AhoCorasick::new(&patterns)?;
        debug!(
            patterns = pattern_map.len(),
            labels = snapshot.entries().len(),
            "keyword automaton built"
        );

        Ok(Self {
            automaton,
            pattern_map,
            snapshot: snapshot.clone(),
        })
    }

    /// The snapshot this automaton was built from.
    pub fn snapshot(&self) -> &DictionarySnapshot {
        &self.snapshot
    }

    /// Number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.pattern_map.len()
    }

    /// Classify one text: a single overlapping scan, hits grouped back to
    /// labels in dictionary order with full keyword evidence. Absent text
    /// yields the unclassified result.
    pub fn classify(&self, text: Option<&str>, policy: MatchPolicy) -> Classification {
        let text = match text {
            Some(t) => t,
            None => return Classification::unclassified(),
        };
        let folded = text.to_lowercase();

        // A pattern counts as fired if any of its occurrences satisfies the
        // policy. Overlapping iteration is required: a hit for one keyword
        // must not shadow a hit for another.
        let mut fired: FxHashSet<usize> = FxHashSet::default();
        for occurrence in self.automaton.find_overlapping_iter(&folded) {
            let pattern = occurrence.pattern().as_usize();
            if fired.contains(&pattern) {
                continue;
            }
            if occurrence_allowed(&folded, occurrence.start(), occurrence.end(), policy) {
                fired.insert(pattern);
            }
        }

        self.group_hits(&fired)
    }

    /// Group fired pattern indices back to labels, preserving dictionary
    /// order for labels and keyword insertion order for evidence.
    fn group_hits(&self, fired: &FxHashSet<usize>) -> Classification {
        let entries = self.snapshot.entries();
        let mut per_label: Vec<SmallVec<[usize; 4]>> =
            vec![SmallVec::new(); entries.len()];
        for pattern in fired {
            let (label_idx, keyword_idx) = self.pattern_map[*pattern];
            per_label[label_idx].push(keyword_idx);
        }

        let mut matches = Vec::new();
        for (label_idx, mut keyword_indices) in per_label.into_iter().enumerate() {
            if keyword_indices.is_empty() {
                continue;
            }
            keyword_indices.sort_unstable();
            let entry = &entries[label_idx];
            matches.push(LabelMatch {
                label: entry.name.clone(),
                keywords: keyword_indices
                    .iter()
                    .map(|&ki| entry.keywords[ki].clone())
                    .collect(),
            });
        }

        Classification { matches }
    }
}

/// Whether an occurrence at `[start, end)` of the folded text counts under
/// `policy`. Word-boundary requires a non-alphanumeric character or the
/// string boundary on both sides.
pub(crate) fn occurrence_allowed(
    text: &str,
    start: usize,
    end: usize,
    policy: MatchPolicy,
) -> bool {
    match policy {
        MatchPolicy::Substring => true,
        MatchPolicy::WordBoundary => {
            let left_ok = text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
            let right_ok = text[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
            left_ok && right_ok
        }
    }
}
