//! gopuml - PlantUML class diagram generator for Go source trees
//!
//! Scans a source tree, extracts every package's types, functions, and
//! top-level declarations into an intermediate model, resolves the reference
//! relationships between them, and renders the result as a PlantUML class
//! diagram.
//!
//! The pipeline runs in two passes. Pass 1 extracts declarations file by
//! file; only when every file is in does pass 2 scan function bodies for
//! usage, so the output never depends on file processing order.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

pub use crate::core::{Analysis, Analyzer};
pub use crate::error::{ErrorSeverity, GopumlError, Result};
pub use crate::models::{Model, RelationshipEdge, Settings};

/// Tool name
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
