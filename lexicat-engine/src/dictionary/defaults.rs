//! Built-in default tactic dictionary.

use super::LabelEntry;

/// The default label → keywords mapping a fresh session starts from.
pub fn default_entries() -> Vec<LabelEntry> {
    fn entry(name: &str, keywords: &[&str]) -> LabelEntry {
        LabelEntry {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    vec![
        entry(
            "scarcity",
            &[
                "last chance",
                "last week",
                "limited time",
                "only a few",
                "before they’re gone",
                "while stocks last",
            ],
        ),
        entry(
            "urgency",
            &[
                "today only",
                "now",
                "hurry",
                "right away",
                "don’t wait",
                "immediately",
            ],
        ),
        entry(
            "social_proof",
            &[
                "popular",
                "bestseller",
                "customers love",
                "everyone",
                "most people",
                "thousands of",
            ],
        ),
        entry(
            "discount",
            &[
                "discount",
                "sale",
                "off",
                "% off",
                "save",
                "special offer",
                "deal",
            ],
        ),
    ]
}
