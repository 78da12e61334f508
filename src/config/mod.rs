//! Configuration management
//!
//! Settings come from three places with a fixed precedence: command-line
//! flags beat the TOML config file, which beats built-in defaults. Each
//! place is a `ConfigSource` producing a `PartialSettings`; the builder
//! merges them in order and validates the result.

pub mod cli;
pub mod file;
pub mod settings;

use crate::error::Result;
use crate::models::{PartialSettings, Settings};

pub use cli::CliConfig;
pub use file::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
    FileConfig, DEFAULT_CONFIG_FILE,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration; later merges win
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve settings from the CLI arguments and the config file.
///
/// An explicit `--config` path must exist; the default config file is
/// optional and silently skipped when absent.
pub fn load_config(args: &crate::cli::args::Args) -> Result<Settings> {
    let cli_config = CliConfig::from_args(args);

    let mut builder = ConfigBuilder::new();
    match cli_config.config_path() {
        Some(path) => {
            builder = builder.merge(parse_config_file(path)?);
        }
        None => {
            if let Some(partial) = find_default_config()? {
                builder = builder.merge(partial);
            }
        }
    }

    builder.load_from(&cli_config)?.build()
}
