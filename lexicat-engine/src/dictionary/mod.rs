//! Dictionary store — the ordered label → keywords configuration.
//!
//! Insertion order is significant: it is the priority order for single-label
//! resolution. Every mutation validates fully before touching state, so a
//! failed call leaves the store exactly as it was.

pub mod defaults;
pub mod import;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

use lexicat_core::errors::{DictionaryError, DictionaryResult, ImportResult};
use lexicat_core::models::MatchPolicy;

/// One label with its ordered keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// The ordered mapping from label to keyword list, plus the store's match
/// policy. Owned by the session; mutated only through the methods below.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    entries: Vec<LabelEntry>,
    policy: MatchPolicy,
}

/// An immutable, cheaply cloneable view of the store at one point in time.
/// Many records may be classified concurrently against one snapshot.
#[derive(Debug, Clone)]
pub struct DictionarySnapshot {
    entries: Arc<[LabelEntry]>,
    policy: MatchPolicy,
    content_hash: u64,
}

impl DictionaryStore {
    /// An empty store with the given match policy.
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// A store seeded with the built-in tactic dictionary.
    pub fn with_defaults(policy: MatchPolicy) -> Self {
        Self {
            entries: defaults::default_entries(),
            policy,
        }
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_label(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Label names in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// The keyword list for `name`, if present.
    pub fn keywords(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.keywords.as_slice())
    }

    /// Add a new label at the end of the order.
    pub fn add_label(&mut self, name: &str, keywords: Vec<String>) -> DictionaryResult<()> {
        if name.trim().is_empty() {
            return Err(DictionaryError::EmptyName);
        }
        if self.contains_label(name) {
            return Err(DictionaryError::DuplicateLabel { name: name.into() });
        }
        validate_keywords(name, &keywords)?;

        debug!(label = name, count = keywords.len(), "label added");
        self.entries.push(LabelEntry {
            name: name.into(),
            keywords,
        });
        Ok(())
    }

    /// Replace the keyword list of an existing label. The label keeps its
    /// position among its siblings; the new list's order becomes the new
    /// keyword priority order.
    pub fn update_label(&mut self, name: &str, keywords: Vec<String>) -> DictionaryResult<()> {
        let position = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| DictionaryError::LabelNotFound { name: name.into() })?;
        validate_keywords(name, &keywords)?;

        debug!(label = name, count = keywords.len(), "label updated");
        self.entries[position].keywords = keywords;
        Ok(())
    }

    /// Remove a label. Re-adding it later places it at the end of the order.
    pub fn delete_label(&mut self, name: &str) -> DictionaryResult<()> {
        let position = self
            .entries
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| DictionaryError::LabelNotFound { name: name.into() })?;

        debug!(label = name, "label deleted");
        self.entries.remove(position);
        Ok(())
    }

    /// Atomically replace the whole store from a parsed structured document.
    /// Validation is all-or-nothing: on any failure the store is untouched.
    pub fn replace_all(&mut self, document: &serde_json::Value) -> ImportResult<()> {
        let entries = import::validate_document(document)?;
        debug!(labels = entries.len(), "store replaced from document");
        self.entries = entries;
        Ok(())
    }

    /// Parse a JSON document and `replace_all` from it.
    pub fn replace_all_from_json(&mut self, json: &str) -> ImportResult<()> {
        let document = import::parse_document(json)?;
        self.replace_all(&document)
    }

    /// Restore the built-in tactic dictionary. No failure mode.
    pub fn reset_to_defaults(&mut self) {
        debug!("store reset to defaults");
        self.entries = defaults::default_entries();
    }

    /// Render the store as a JSON object (label → keyword list), preserving
    /// label and keyword order. Re-importing the output reproduces the store.
    pub fn export_json(&self) -> String {
        import::export_entries(&self.entries)
    }

    /// An immutable view of the current state for classification.
    pub fn snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            content_hash: content_hash(&self.entries),
            entries: self.entries.clone().into(),
            policy: self.policy,
        }
    }
}

impl DictionarySnapshot {
    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.policy
    }

    /// xxh3 hash of the label/keyword content, used to key the automaton
    /// cache. Two snapshots with equal content hash identically.
    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

/// Keyword list validation shared by `add_label` and `update_label`.
fn validate_keywords(label: &str, keywords: &[String]) -> DictionaryResult<()> {
    if keywords.is_empty() {
        return Err(DictionaryError::EmptyKeywordList {
            label: label.into(),
        });
    }
    for (position, keyword) in keywords.iter().enumerate() {
        if keyword.trim().is_empty() {
            return Err(DictionaryError::InvalidKeyword {
                label: label.into(),
                position,
            });
        }
    }
    Ok(())
}

/// Content hash over labels and keywords, length-framed so that
/// `["ab"] / ["a","b"]` style ambiguities cannot collide.
fn content_hash(entries: &[LabelEntry]) -> u64 {
    let mut hasher = Xxh3::new();
    for entry in entries {
        hasher.update(&(entry.name.len() as u64).to_le_bytes());
        hasher.update(entry.name.as_bytes());
        hasher.update(&(entry.keywords.len() as u64).to_le_bytes());
        for keyword in &entry.keywords {
            hasher.update(&(keyword.len() as u64).to_le_bytes());
            hasher.update(keyword.as_bytes());
        }
    }
    hasher.digest()
}
