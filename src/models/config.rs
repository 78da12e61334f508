//! Configuration models
//!
//! `Settings` is the fully-resolved configuration a run operates on.
//! `PartialSettings` is the mergeable form produced by the CLI and the TOML
//! config file; CLI values win over file values, file values over defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fully-resolved runtime settings
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Directory tree to scan for source files
    pub scan_path: PathBuf,
    /// Path component marking where module-relative paths begin
    pub source_root: String,
    /// Source file extension to collect
    pub extension: String,
    /// Glob patterns for paths to exclude from discovery
    pub exclude_patterns: Vec<String>,
    /// Keep edges that touch a synthesized global holder
    pub include_globals: bool,
    /// Emit the raw intermediate model as JSON instead of a diagram
    pub dump_model: bool,
    /// Write output here instead of stdout
    pub output_file: Option<PathBuf>,
    /// Follow symbolic links during discovery
    pub follow_links: bool,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Report extra detail on stderr
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            source_root: "src".to_string(),
            extension: "go".to_string(),
            exclude_patterns: Vec::new(),
            include_globals: false,
            dump_model: false,
            output_file: None,
            follow_links: false,
            quiet: false,
            verbose: false,
        }
    }
}

/// Partial settings from one configuration source
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub source_root: Option<String>,
    pub extension: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub include_globals: Option<bool>,
    pub dump_model: Option<bool>,
    pub output_file: Option<PathBuf>,
    pub follow_links: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Overlay another partial on top of this one; `other` wins where set
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.source_root.is_some() {
            self.source_root = other.source_root;
        }
        if other.extension.is_some() {
            self.extension = other.extension;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.include_globals.is_some() {
            self.include_globals = other.include_globals;
        }
        if other.dump_model.is_some() {
            self.dump_model = other.dump_model;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Fill the gaps with defaults and produce final settings
    pub fn to_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            scan_path: self.scan_path.unwrap_or(defaults.scan_path),
            source_root: self.source_root.unwrap_or(defaults.source_root),
            extension: self.extension.unwrap_or(defaults.extension),
            exclude_patterns: self.exclude_patterns.unwrap_or(defaults.exclude_patterns),
            include_globals: self.include_globals.unwrap_or(defaults.include_globals),
            dump_model: self.dump_model.unwrap_or(defaults.dump_model),
            output_file: self.output_file.or(defaults.output_file),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        }
    }
}
