//! # lexicat-engine
//!
//! Rule-based multi-label text classification: an ordered dictionary of
//! labels → keyword lists, a case-insensitive multi-pattern matcher, and
//! single/multi label resolution with per-keyword match evidence.
//!
//! The store is single-writer: every mutation validates fully before it
//! touches state, so readers holding a [`DictionarySnapshot`] never observe
//! a partial write. Snapshots are immutable and cheap to clone; batch
//! classification against one snapshot is read-only and fans out freely
//! across cores.

pub mod batch;
pub mod classifier;
pub mod dictionary;

pub use batch::{classify_batch, summarize, BatchRow};
pub use classifier::{classify, AutomatonCache, Classifier, KeywordAutomaton};
pub use dictionary::{DictionarySnapshot, DictionaryStore, LabelEntry};
