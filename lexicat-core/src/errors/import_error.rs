//! Structured dictionary import (`replace_all`) errors.
//!
//! Import validation is all-or-nothing: any of these errors means the whole
//! document was rejected and the previous store was left untouched. Each
//! variant carries enough detail to pinpoint the offending label or keyword.

/// Errors from parsing and validating a structured dictionary document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("document is not valid JSON: {message}")]
    Parse { message: String },

    #[error("document root must be an object mapping labels to keyword lists")]
    NotAMapping,

    #[error("label at position {position} is empty or whitespace")]
    EmptyLabel { position: usize },

    #[error("label '{label}' must map to a non-empty list of keywords")]
    EmptyKeywordList { label: String },

    #[error("label '{label}' keyword at position {position} is invalid: {detail}")]
    InvalidKeyword {
        label: String,
        position: usize,
        detail: String,
    },
}

pub type ImportResult<T> = Result<T, ImportError>;
