//! Command-line argument configuration source
//!
//! Highest-precedence source: a flag the caller actually passed always wins
//! over the config file and the defaults. Absent flags contribute nothing.

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::PartialSettings;
use std::path::PathBuf;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: Args,
    name: String,
}

impl CliConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            args: args.clone(),
            name: "command-line arguments".to_string(),
        }
    }

    /// The config file path when `--config` was given
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings::default();

        if let Some(path) = &args.path {
            settings.scan_path = Some(path.clone());
        }
        if let Some(source_root) = &args.source_root {
            settings.source_root = Some(source_root.clone());
        }
        if let Some(extension) = &args.extension {
            settings.extension = Some(extension.clone());
        }
        if !args.exclude.is_empty() {
            settings.exclude_patterns = Some(args.exclude.clone());
        }
        if let Some(output_file) = &args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // boolean flags only override when set; their absence must not mask
        // a value from the config file
        if args.include_globals {
            settings.include_globals = Some(true);
        }
        if args.dump {
            settings.dump_model = Some(true);
        }
        if args.follow_links {
            settings.follow_links = Some(true);
        }
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
