//! Error handling for lexicat.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod dictionary_error;
pub mod import_error;

pub use dictionary_error::{DictionaryError, DictionaryResult};
pub use import_error::{ImportError, ImportResult};
