//! Error handling for gopuml
//!
//! Every extraction error (malformed imports, declarations, fields,
//! variables) fails the run: there is no partial-model recovery.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, GopumlError, Result};
