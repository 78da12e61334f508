//! Run orchestration: discovery and the two-pass analysis pipeline

pub mod analyzer;
pub mod discovery;

pub use analyzer::{Analysis, Analyzer};
pub use discovery::{discover, DiscoveredFile};
