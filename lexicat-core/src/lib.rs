//! # lexicat-core
//!
//! Foundation crate for the lexicat classification engine.
//! Defines the shared models, error taxonomy, and configuration.
//! The engine crate depends on this; this depends on nothing internal.

pub mod config;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{DictionaryError, DictionaryResult, ImportError, ImportResult};
pub use models::{BatchSummary, Classification, ClassifyMode, LabelMatch, MatchPolicy};
