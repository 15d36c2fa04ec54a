//! Property tests for classification semantics.
//!
//! The oracle re-states the contract directly: a label matches when at
//! least one of its case-folded keywords occurs in the case-folded text
//! under the policy, the primary label is the first match in dictionary
//! order, and the multi set is all matches in dictionary order.

use proptest::prelude::*;

use lexicat_core::models::MatchPolicy;
use lexicat_engine::dictionary::DictionaryStore;
use lexicat_engine::{classify, Classifier};

/// Generate a small well-formed dictionary: unique non-blank labels, each
/// with a non-empty list of non-blank keywords.
fn dict_strategy() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::collection::vec("[a-z%! ]{1,10}", 1..5),
        ),
        1..6,
    )
    .prop_map(|raw| {
        let mut seen = std::collections::HashSet::new();
        let mut entries = Vec::new();
        for (name, keywords) in raw {
            if !seen.insert(name.clone()) {
                continue;
            }
            let keywords: Vec<String> = keywords
                .into_iter()
                .filter(|k| !k.trim().is_empty())
                .collect();
            if keywords.is_empty() {
                continue;
            }
            entries.push((name, keywords));
        }
        if entries.is_empty() {
            entries.push(("fallback".to_string(), vec!["keyword".to_string()]));
        }
        entries
    })
}

fn build_store(entries: &[(String, Vec<String>)], policy: MatchPolicy) -> DictionaryStore {
    let mut store = DictionaryStore::new(policy);
    for (name, keywords) in entries {
        store.add_label(name, keywords.clone()).unwrap();
    }
    store
}

/// The spec's matching rule, stated directly.
fn oracle_keyword_matches(text: &str, keyword: &str, policy: MatchPolicy) -> bool {
    let text = text.to_lowercase();
    let keyword = keyword.to_lowercase();
    match policy {
        MatchPolicy::Substring => text.contains(&keyword),
        MatchPolicy::WordBoundary => {
            // Every occurrence position is a candidate, including ones that
            // overlap an occurrence whose boundary check failed.
            let mut from = 0;
            while let Some(offset) = text[from..].find(&keyword) {
                let start = from + offset;
                let end = start + keyword.len();
                let left_ok = text[..start]
                    .chars()
                    .next_back()
                    .map_or(true, |c| !c.is_alphanumeric());
                let right_ok = text[end..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphanumeric());
                if left_ok && right_ok {
                    return true;
                }
                from = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
            false
        }
    }
}

fn oracle_matched_labels(
    entries: &[(String, Vec<String>)],
    text: &str,
    policy: MatchPolicy,
) -> Vec<String> {
    entries
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|k| oracle_keyword_matches(text, k, policy))
        })
        .map(|(name, _)| name.clone())
        .collect()
}

fn policy_strategy() -> impl Strategy<Value = MatchPolicy> {
    prop_oneof![
        Just(MatchPolicy::Substring),
        Just(MatchPolicy::WordBoundary)
    ]
}

proptest! {
    #[test]
    fn primary_is_first_matching_label_in_order(
        entries in dict_strategy(),
        text in "[a-z%! ]{0,60}",
        policy in policy_strategy(),
    ) {
        let snap = build_store(&entries, policy).snapshot();
        let result = classify(Some(&text), &snap, None);
        let expected = oracle_matched_labels(&entries, &text, policy);
        prop_assert_eq!(result.primary(), expected.first().map(String::as_str));
    }

    #[test]
    fn multi_set_is_exactly_matching_labels_in_order(
        entries in dict_strategy(),
        text in "[a-z%! ]{0,60}",
        policy in policy_strategy(),
    ) {
        let snap = build_store(&entries, policy).snapshot();
        let result = classify(Some(&text), &snap, None);
        let expected = oracle_matched_labels(&entries, &text, policy);
        prop_assert_eq!(result.label_names(), expected.iter().map(String::as_str).collect::<Vec<_>>());

        // Superset-or-equal of {primary} when primary is present.
        if let Some(primary) = result.primary() {
            prop_assert!(result.label_names().contains(&primary));
        }
    }

    #[test]
    fn classification_is_idempotent(
        entries in dict_strategy(),
        text in proptest::option::of("[a-z%! ]{0,60}"),
        policy in policy_strategy(),
    ) {
        let snap = build_store(&entries, policy).snapshot();
        let first = classify(text.as_deref(), &snap, None);
        let second = classify(text.as_deref(), &snap, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn automaton_path_agrees_with_direct_scan(
        entries in dict_strategy(),
        text in proptest::option::of("[a-z%! ]{0,60}"),
        policy in policy_strategy(),
    ) {
        let snap = build_store(&entries, policy).snapshot();
        let classifier = Classifier::default();
        prop_assert_eq!(
            classifier.classify(text.as_deref(), &snap, None),
            classify(text.as_deref(), &snap, None)
        );
    }

    #[test]
    fn export_import_round_trip_preserves_store(
        entries in dict_strategy(),
    ) {
        let mut store = build_store(&entries, MatchPolicy::Substring);
        let exported = store.export_json();
        store.replace_all_from_json(&exported).unwrap();

        let reimported: Vec<(String, Vec<String>)> = store
            .snapshot()
            .entries()
            .iter()
            .map(|e| (e.name.clone(), e.keywords.clone()))
            .collect();
        prop_assert_eq!(reimported, entries);
    }
}
