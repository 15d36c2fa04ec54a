//! Dictionary mutation errors.
//!
//! Every mutation validates before it touches state, so any of these errors
//! guarantees the store is exactly as it was before the call.

/// Errors from dictionary store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error("label '{name}' already exists")]
    DuplicateLabel { name: String },

    #[error("label '{name}' not found")]
    LabelNotFound { name: String },

    #[error("label name is empty or whitespace")]
    EmptyName,

    #[error("label '{label}' has no keywords")]
    EmptyKeywordList { label: String },

    #[error("label '{label}' keyword at position {position} is empty or whitespace")]
    InvalidKeyword { label: String, position: usize },
}

pub type DictionaryResult<T> = Result<T, DictionaryError>;
