//! Automaton cache keyed by snapshot content hash.
//!
//! Rebuilding the automaton on every call would make batch classification
//! O(total keyword length) per record; memoizing by content hash rebuilds
//! only when the dictionary actually changes. Purely a throughput
//! optimization — semantics are identical with or without it.

use std::sync::Arc;

use aho_corasick::BuildError;
use moka::sync::Cache;
use tracing::debug;

use crate::classifier::automaton::KeywordAutomaton;
use crate::dictionary::DictionarySnapshot;

/// Cache of compiled automatons, keyed by the snapshot's xxh3 content hash.
pub struct AutomatonCache {
    cache: Cache<u64, Arc<KeywordAutomaton>>,
}

impl AutomatonCache {
    /// A cache holding up to `capacity` compiled automatons.
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
        }
    }

    /// Return the automaton for `snapshot`, building and inserting it on a
    /// miss. A concurrent miss may build twice; the duplicate is discarded.
    pub fn get_or_build(
        &self,
        snapshot: &DictionarySnapshot,
    ) -> Result<Arc<KeywordAutomaton>, BuildError> {
        let key = snapshot.content_hash();
        if let Some(automaton) = self.cache.get(&key) {
            return Ok(automaton);
        }

        debug!(content_hash = key, "automaton cache miss");
        let automaton = Arc::new(KeywordAutomaton::build(snapshot)?);
        self.cache.insert(key, automaton.clone());
        Ok(automaton)
    }

    /// Number of cached automatons.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
