//! Configuration file handling
//!
//! Loads and validates the TOML config file. The default location is
//! `.gopuml.toml` in the working directory; `--config` points anywhere else.

use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigSource;
use crate::error::{GopumlError, Result};
use crate::models::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".gopuml.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// File source at the default location
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_FILE)
    }

    /// File source at a custom location
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.exists()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GopumlError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| GopumlError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|source| GopumlError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_partial_settings(&settings, path)?;
    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(GopumlError::config_error(format!(
                "Invalid empty scan_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(source_root) = &settings.source_root {
        if source_root.is_empty() {
            return Err(GopumlError::config_error(format!(
                "Invalid empty source_root in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(GopumlError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }
            glob::Pattern::new(pattern).map_err(|e| {
                GopumlError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(GopumlError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Load the default config file when present
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    parse_config_file(path).map(Some)
}

/// Write a commented default configuration file
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let content = r#"# gopuml configuration

# Directory tree to scan
# scan_path = "."

# Path component marking where module-relative paths begin
# source_root = "src"

# Source file extension to collect
# extension = "go"

# Glob patterns excluded from discovery
# exclude_patterns = ["**/vendor/**"]

# Keep edges that touch a module's global holder
# include_globals = false

# Write output here instead of stdout
# output_file = "diagram.puml"

# Follow symbolic links during discovery
# follow_links = false
"#;

    fs::write(path, content).map_err(|source| GopumlError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gopuml.toml");
        fs::write(&path, "source_root = \"code\"\ninclude_globals = true\n").unwrap();

        let partial = parse_config_file(&path).unwrap();
        assert_eq!(partial.source_root.as_deref(), Some("code"));
        assert_eq!(partial.include_globals, Some(true));
    }

    #[test]
    fn test_missing_config_file() {
        let err = parse_config_file("/no/such/.gopuml.toml").unwrap_err();
        assert!(matches!(err, GopumlError::ConfigNotFound { .. }));
        assert!(err.is_critical());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse_config_content("max_depth = 3\n", ".gopuml.toml").unwrap_err();
        assert!(matches!(err, GopumlError::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_exclude_pattern_rejected() {
        let err =
            parse_config_content("exclude_patterns = [\"[\"]\n", ".gopuml.toml").unwrap_err();
        assert!(matches!(err, GopumlError::Config { .. }));
    }

    #[test]
    fn test_create_default_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gopuml.toml");
        create_default_config(&path).unwrap();

        // every key is commented out, so the file parses to an empty partial
        let partial = parse_config_file(&path).unwrap();
        assert!(partial.scan_path.is_none());
        assert!(partial.include_globals.is_none());
    }
}
