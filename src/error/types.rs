//! Error types and definitions for gopuml
//!
//! Extraction errors carry the offending file and source line so that a
//! malformed declaration can be reported exactly where it was found. Every
//! extraction error is fatal to the run: there is no partial-model recovery.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - the run fails with a caller-facing diagnostic
    Error,
    /// Critical level - configuration or output plumbing is broken
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for gopuml operations
#[derive(Debug, Error)]
pub enum GopumlError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A source file path that does not contain the source-root marker
    #[error("couldn't determine the module of source file {path}: no '{marker}' component in its path")]
    FileUnresolvable { path: PathBuf, marker: String },

    /// A renamed import line that does not split into alias + quoted path
    #[error("malformed import in {file} (line {line_no}): {line}")]
    MalformedImport {
        file: String,
        line_no: usize,
        line: String,
    },

    /// A type, field, or function line that doesn't split into the expected components
    #[error("malformed declaration in {file} (line {line_no}): {line}")]
    MalformedDeclaration {
        file: String,
        line_no: usize,
        line: String,
    },

    /// A struct field line whose name component is empty
    #[error("empty field name in {file} (line {line_no}): {line}")]
    EmptyFieldName {
        file: String,
        line_no: usize,
        line: String,
    },

    /// A var/const declaration whose name component is empty
    #[error("empty variable name in {file} (line {line_no}): {line}")]
    EmptyVariableName {
        file: String,
        line_no: usize,
        line: String,
    },

    /// A grouped var/const block that cannot be decomposed line by line
    #[error("malformed const/var block in {file} (line {line_no}): {line}")]
    MalformedConstBlock {
        file: String,
        line_no: usize,
        line: String,
    },

    /// A single-line var/const declaration that cannot be decomposed
    #[error("malformed variable declaration in {file} (line {line_no}): {line}")]
    MalformedVariable {
        file: String,
        line_no: usize,
        line: String,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[from]
        source: glob::PatternError,
    },

    /// JSON serialization error (model dump)
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Analysis errors with free-form context
    #[error("Analysis error: {message}")]
    Analysis { message: String },
}

impl GopumlError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical errors - configuration or output plumbing is broken
            GopumlError::Config { .. } => ErrorSeverity::Critical,
            GopumlError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            GopumlError::ConfigRead { .. } => ErrorSeverity::Critical,
            GopumlError::ConfigParse { .. } => ErrorSeverity::Critical,
            GopumlError::GlobPattern { .. } => ErrorSeverity::Critical,
            GopumlError::InvalidPath { .. } => ErrorSeverity::Critical,
            GopumlError::OutputWrite { .. } => ErrorSeverity::Critical,
            GopumlError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Everything else, extraction errors included, fails the run
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            GopumlError::FileUnresolvable { path, marker } => {
                format!(
                    "Cannot derive a module path for '{}': the file is not under a '{}' directory. \
                     Use --source-root to change the marker component.",
                    path.display(),
                    marker
                )
            }
            GopumlError::MalformedImport { file, line_no, line } => {
                format!(
                    "Malformed import in '{}' line {}: '{}'. Expected '\"path\"' or 'alias \"path\"'.",
                    file, line_no, line
                )
            }
            GopumlError::MalformedDeclaration { file, line_no, line } => {
                format!(
                    "Malformed declaration in '{}' line {}: '{}'. Expected 'NAME DEFINITION'.",
                    file, line_no, line
                )
            }
            GopumlError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            GopumlError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            GopumlError::Io { source } => {
                format!(
                    "File system error: {}. Check permissions and that the path exists.",
                    source
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        GopumlError::Config {
            message: message.into(),
        }
    }

    pub fn file_unresolvable(path: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        GopumlError::FileUnresolvable {
            path: path.into(),
            marker: marker.into(),
        }
    }

    pub fn malformed_import(file: impl Into<String>, line_no: usize, line: impl Into<String>) -> Self {
        GopumlError::MalformedImport {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }

    pub fn malformed_declaration(
        file: impl Into<String>,
        line_no: usize,
        line: impl Into<String>,
    ) -> Self {
        GopumlError::MalformedDeclaration {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }

    pub fn empty_field_name(file: impl Into<String>, line_no: usize, line: impl Into<String>) -> Self {
        GopumlError::EmptyFieldName {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }

    pub fn empty_variable_name(
        file: impl Into<String>,
        line_no: usize,
        line: impl Into<String>,
    ) -> Self {
        GopumlError::EmptyVariableName {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }

    pub fn malformed_const_block(
        file: impl Into<String>,
        line_no: usize,
        line: impl Into<String>,
    ) -> Self {
        GopumlError::MalformedConstBlock {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }

    pub fn malformed_variable(
        file: impl Into<String>,
        line_no: usize,
        line: impl Into<String>,
    ) -> Self {
        GopumlError::MalformedVariable {
            file: file.into(),
            line_no,
            line: line.into(),
        }
    }
}

/// Result type alias for gopuml operations
pub type Result<T> = std::result::Result<T, GopumlError>;
