//! Error context utilities for gopuml
//!
//! Helpers for attaching human-readable context to errors raised while
//! orchestrating a run.

use crate::error::{GopumlError, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| GopumlError::Analysis {
            message: format!("{}: {}", context(), err),
        })
    }
}
