//! Settings validation

use crate::error::{GopumlError, Result};
use crate::models::Settings;

/// Validator for fully-resolved settings
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings before a run starts
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.exists() {
            return Err(GopumlError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }
        if !settings.scan_path.is_dir() {
            return Err(GopumlError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        if settings.source_root.is_empty() || settings.source_root.contains('/') {
            return Err(GopumlError::config_error(format!(
                "source_root must be a single path component, got '{}'",
                settings.source_root
            )));
        }

        if settings.extension.is_empty() || settings.extension.starts_with('.') {
            return Err(GopumlError::config_error(format!(
                "extension must be given without a leading dot, got '{}'",
                settings.extension
            )));
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                GopumlError::config_error(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        if settings.quiet && settings.verbose {
            return Err(GopumlError::config_error(
                "quiet and verbose are mutually exclusive",
            ));
        }

        Ok(())
    }
}
