//! Structured dictionary import/export.
//!
//! Import is two distinct steps: parse the text to a generic JSON value,
//! then run the schema checks before anything is accepted into a store.
//! Validation builds the complete candidate entry list first, so a failure
//! anywhere rejects the whole document.

use serde_json::{Map, Value};

use lexicat_core::errors::{ImportError, ImportResult};

use super::LabelEntry;

/// Step 1: parse a JSON document. No schema checks beyond well-formedness.
pub fn parse_document(json: &str) -> ImportResult<Value> {
    serde_json::from_str(json).map_err(|e| ImportError::Parse {
        message: e.to_string(),
    })
}

/// Step 2: validate a parsed document against the dictionary schema.
///
/// Root must be an object; every key a non-empty string; every value a
/// non-empty list of non-empty strings. Key order in the document becomes
/// label insertion order.
pub fn validate_document(document: &Value) -> ImportResult<Vec<LabelEntry>> {
    let mapping = document.as_object().ok_or(ImportError::NotAMapping)?;

    let mut entries = Vec::with_capacity(mapping.len());
    for (position, (name, value)) in mapping.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ImportError::EmptyLabel { position });
        }

        let items = value.as_array().ok_or_else(|| ImportError::EmptyKeywordList {
            label: name.clone(),
        })?;
        if items.is_empty() {
            return Err(ImportError::EmptyKeywordList {
                label: name.clone(),
            });
        }

        let mut keywords = Vec::with_capacity(items.len());
        for (kw_position, item) in items.iter().enumerate() {
            let keyword = item.as_str().ok_or_else(|| ImportError::InvalidKeyword {
                label: name.clone(),
                position: kw_position,
                detail: "not a string".into(),
            })?;
            if keyword.trim().is_empty() {
                return Err(ImportError::InvalidKeyword {
                    label: name.clone(),
                    position: kw_position,
                    detail: "empty or whitespace".into(),
                });
            }
            keywords.push(keyword.to_string());
        }

        entries.push(LabelEntry {
            name: name.clone(),
            keywords,
        });
    }

    Ok(entries)
}

/// Render entries as a pretty-printed JSON object, preserving label and
/// keyword order (`serde_json` is built with `preserve_order`).
pub fn export_entries(entries: &[LabelEntry]) -> String {
    let mut mapping = Map::with_capacity(entries.len());
    for entry in entries {
        mapping.insert(
            entry.name.clone(),
            Value::Array(
                entry
                    .keywords
                    .iter()
                    .map(|k| Value::String(k.clone()))
                    .collect(),
            ),
        );
    }
    // A map of strings to string arrays cannot fail to serialize.
    serde_json::to_string_pretty(&Value::Object(mapping)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_document("{not json").unwrap_err();
        assert!(matches!(err, ImportError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_non_mapping_root() {
        let doc = parse_document(r#"["a", "b"]"#).unwrap();
        assert_eq!(validate_document(&doc).unwrap_err(), ImportError::NotAMapping);
    }

    #[test]
    fn test_validate_rejects_blank_label() {
        let doc = parse_document(r#"{"ok": ["x"], "  ": ["y"]}"#).unwrap();
        assert_eq!(
            validate_document(&doc).unwrap_err(),
            ImportError::EmptyLabel { position: 1 }
        );
    }

    #[test]
    fn test_validate_rejects_non_list_value() {
        let doc = parse_document(r#"{"ok": "not a list"}"#).unwrap();
        assert_eq!(
            validate_document(&doc).unwrap_err(),
            ImportError::EmptyKeywordList { label: "ok".into() }
        );
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        let doc = parse_document(r#"{"ok": []}"#).unwrap();
        assert_eq!(
            validate_document(&doc).unwrap_err(),
            ImportError::EmptyKeywordList { label: "ok".into() }
        );
    }

    #[test]
    fn test_validate_pinpoints_bad_keyword() {
        let doc = parse_document(r#"{"ok": ["x", 3]}"#).unwrap();
        assert_eq!(
            validate_document(&doc).unwrap_err(),
            ImportError::InvalidKeyword {
                label: "ok".into(),
                position: 1,
                detail: "not a string".into()
            }
        );
    }

    #[test]
    fn test_validate_preserves_document_order() {
        let doc = parse_document(r#"{"b": ["1"], "a": ["2", "3"]}"#).unwrap();
        let entries = validate_document(&doc).unwrap();
        assert_eq!(entries[0].name, "b");
        assert_eq!(entries[1].name, "a");
        assert_eq!(entries[1].keywords, vec!["2", "3"]);
    }

    #[test]
    fn test_export_then_validate_round_trips() {
        let entries = vec![
            LabelEntry {
                name: "urgency".into(),
                keywords: vec!["hurry".into(), "today only".into()],
            },
            LabelEntry {
                name: "discount".into(),
                keywords: vec!["% off".into()],
            },
        ];
        let exported = export_entries(&entries);
        let reparsed = validate_document(&parse_document(&exported).unwrap()).unwrap();
        assert_eq!(reparsed, entries);
    }
}
