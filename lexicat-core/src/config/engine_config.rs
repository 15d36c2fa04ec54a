//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::models::MatchPolicy;

/// Configuration for the classification engine.
///
/// The match policy has no ambient engine-level default: deployments are
/// expected to set it explicitly. `effective_match_policy` falls back to
/// word-boundary when the config omits it, and that fallback is documented
/// here rather than buried in the matcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Match policy for new dictionary stores. Fallback: word_boundary.
    pub match_policy: Option<MatchPolicy>,
    /// Capacity of the automaton cache (snapshots memoized). Default: 16.
    pub automaton_cache_capacity: Option<u64>,
    /// Batch size at which classification fans out across cores. Default: 64.
    pub parallel_threshold: Option<usize>,
}

impl EngineConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Returns the effective match policy, defaulting to word-boundary.
    pub fn effective_match_policy(&self) -> MatchPolicy {
        self.match_policy.unwrap_or(MatchPolicy::WordBoundary)
    }

    /// Returns the effective automaton cache capacity, defaulting to 16.
    pub fn effective_automaton_cache_capacity(&self) -> u64 {
        self.automaton_cache_capacity.unwrap_or(16)
    }

    /// Returns the effective parallel threshold, defaulting to 64 records.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(64)
    }
}
