//! Match policy: how a keyword occurrence in text counts as a hit.

use serde::{Deserialize, Serialize};

/// Matching policy for keyword occurrences. Comparison is always
/// case-insensitive; the policy only controls what counts as an occurrence.
///
/// Deployments must pick one explicitly — the store carries its policy and
/// classification accepts a per-call override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// A keyword matches anywhere it occurs as a contiguous substring.
    /// `"% off"` matches `"50% off today"`; `"i"` matches inside `"this"`.
    Substring,
    /// A keyword matches only when both ends of the occurrence touch a
    /// non-alphanumeric character or the string boundary.
    /// `"i"` does not match inside `"this"`.
    WordBoundary,
}
