//! Shared models for classification input and output.

pub mod batch_summary;
pub mod classification;
pub mod match_policy;

pub use batch_summary::BatchSummary;
pub use classification::{Classification, ClassifyMode, LabelMatch};
pub use match_policy::MatchPolicy;
