//! Per-record classification result.

use serde::{Deserialize, Serialize};

/// Which derived field the caller primarily wants rendered. Both single and
/// multi resolution are always computed; the mode only affects projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifyMode {
    /// Project the primary label (first matched label in dictionary order).
    Single,
    /// Project all matched labels.
    Multi,
}

/// One matched label with the keywords that fired as evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMatch {
    /// The label name.
    pub label: String,
    /// Every keyword of this label that matched, in keyword insertion order.
    pub keywords: Vec<String>,
}

/// The result of classifying one text record against one dictionary
/// snapshot. Immutable once produced; owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// All matched labels in dictionary insertion order, each with its
    /// matched-keyword evidence.
    pub matches: Vec<LabelMatch>,
}

impl Classification {
    /// The unclassified result: no matches, no primary. Used for absent or
    /// non-matching text — missing data is a first-class case, not an error.
    pub fn unclassified() -> Self {
        Self { matches: Vec::new() }
    }

    /// True when no label matched.
    pub fn is_unclassified(&self) -> bool {
        self.matches.is_empty()
    }

    /// The primary label: first matched label in dictionary order, or `None`
    /// when nothing matched.
    pub fn primary(&self) -> Option<&str> {
        self.matches.first().map(|m| m.label.as_str())
    }

    /// All matched label names in dictionary order.
    pub fn label_names(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.label.as_str()).collect()
    }

    /// Matched label names joined with `sep`, for flattening into an output
    /// column. Empty string when unclassified.
    pub fn joined_labels(&self, sep: &str) -> String {
        self.label_names().join(sep)
    }

    /// Project the result for display according to `mode`: the primary label
    /// alone, or all matched labels semicolon-joined. `None` when
    /// unclassified.
    pub fn render(&self, mode: ClassifyMode) -> Option<String> {
        if self.is_unclassified() {
            return None;
        }
        match mode {
            ClassifyMode::Single => self.primary().map(str::to_string),
            ClassifyMode::Multi => Some(self.joined_labels(";")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Classification {
        Classification {
            matches: vec![
                LabelMatch {
                    label: "urgency".into(),
                    keywords: vec!["hurry".into(), "today only".into()],
                },
                LabelMatch {
                    label: "discount".into(),
                    keywords: vec!["sale".into()],
                },
            ],
        }
    }

    #[test]
    fn test_primary_is_first_match() {
        assert_eq!(sample().primary(), Some("urgency"));
    }

    #[test]
    fn test_render_modes() {
        let c = sample();
        assert_eq!(c.render(ClassifyMode::Single).as_deref(), Some("urgency"));
        assert_eq!(
            c.render(ClassifyMode::Multi).as_deref(),
            Some("urgency;discount")
        );
    }

    #[test]
    fn test_unclassified_has_no_primary() {
        let c = Classification::unclassified();
        assert!(c.is_unclassified());
        assert_eq!(c.primary(), None);
        assert_eq!(c.render(ClassifyMode::Single), None);
        assert_eq!(c.render(ClassifyMode::Multi), None);
    }
}
