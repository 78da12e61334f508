//! Source text analysis
//!
//! The pipeline's text-facing half: comment stripping, import resolution,
//! per-file declaration extraction, function-body usage scanning, and final
//! relationship graph construction.

pub mod comment_filter;
pub mod extractor;
pub mod graph_builder;
pub mod imports;
pub mod usage;

pub use comment_filter::strip_comments;
pub use extractor::{Extractor, FileOutcome};
pub use graph_builder::GraphBuilder;
