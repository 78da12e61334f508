//! Command implementations

use super::Args;
use crate::config;
use crate::core::Analyzer;
use crate::error::Result;
use crate::output::{self, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate a diagram (or a model dump) for the configured tree
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => generate(args),
            Command::Init => init(),
        }
    }
}

fn generate(args: &Args) -> Result<()> {
    let settings = config::load_config(args)?;

    // stdout carries the diagram, so diagnostics go to stderr
    if !settings.quiet {
        eprintln!(
            "{} v{} - scanning {}",
            crate::NAME,
            crate::VERSION,
            settings.scan_path.display()
        );
        if settings.verbose {
            eprintln!("Settings: {:#?}", settings);
        }
    }

    let analyzer = Analyzer::new(settings);
    let analysis = analyzer.run()?;
    let settings = analyzer.settings();

    if !settings.quiet {
        eprintln!(
            "Analyzed {} files in {} modules: {} entities, {} relationships",
            analysis.file_count,
            analysis.model.modules.len(),
            analysis
                .model
                .modules
                .values()
                .map(|m| m.entities.len())
                .sum::<usize>(),
            analysis.edges.len()
        );
    }

    let content = if settings.dump_model {
        output::dump::render(&analysis.model, &analysis.edges)?
    } else {
        output::puml::render(&analysis.model, &analysis.edges)
    };

    let writer = create_writer(settings.output_file.as_ref());
    writer.write(&content)?;

    if let Some(path) = &settings.output_file {
        if !settings.quiet {
            eprintln!("Output written to {}", path.display());
        }
    }

    Ok(())
}

fn init() -> Result<()> {
    config::create_default_config(config::DEFAULT_CONFIG_FILE)?;
    println!("Created {}", config::DEFAULT_CONFIG_FILE);
    Ok(())
}
