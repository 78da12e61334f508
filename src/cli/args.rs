//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// gopuml - PlantUML class diagram generator for Go source trees
#[derive(Parser, Debug, Clone)]
#[command(name = "gopuml")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a PlantUML class diagram from a Go source tree")]
#[command(long_about = "gopuml scans a source tree for Go files, extracts the types, functions, and \
top-level declarations of every package, and renders them as a PlantUML class diagram with the \
reference relationships between them. The diagram is written to stdout so it can be piped \
straight into PlantUML.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Scan the current directory and print the diagram
    gopuml

    # Scan a specific project
    gopuml --path ./my-project

    # Write the diagram to a file
    gopuml --output-file diagram.puml

    # Render directly
    gopuml --path ./my-project | plantuml -pipe > diagram.png

Scope:
    # Exclude vendored code (can be given multiple times)
    gopuml --exclude '**/vendor/**'

    # Source tree rooted somewhere other than 'src'
    gopuml --source-root code

    # Include edges that touch a package's global holder
    gopuml --include-globals

Inspection:
    # Dump the intermediate model as JSON instead of a diagram
    gopuml --dump

Configuration:
    # Use a specific configuration file
    gopuml --config ./gopuml.toml

    # Create a default .gopuml.toml
    gopuml --init
")]
pub struct Args {
    /// Target directory to scan
    #[arg(short, long, value_name = "PATH", help = "Directory to scan for source files (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Exclude paths matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for paths to exclude (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Path component where module-relative paths begin
    #[arg(long, value_name = "DIR", help = "Directory component marking the source root; module paths are derived from the components after its last occurrence (default 'src')")]
    pub source_root: Option<String>,

    /// Source file extension to collect
    #[arg(long, value_name = "EXT", help = "File extension to collect, without the dot (default 'go')")]
    pub extension: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the diagram to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Keep edges that touch a module's global holder
    #[arg(short = 'g', long, help = "Keep relationship edges from and to the synthesized per-package global holders, and redirect references to unknown symbols of a known package to its holder")]
    pub include_globals: bool,

    /// Dump the intermediate model as JSON instead of a diagram
    #[arg(short, long, help = "Emit the extracted model and resolved edges as JSON instead of PlantUML")]
    pub dump: bool,

    /// Follow symbolic links during discovery
    #[arg(long, help = "Follow symbolic links while walking the scan path")]
    pub follow_links: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress startup and summary information on stderr")]
    pub quiet: bool,

    /// Show detailed progress information
    #[arg(short, long, help = "Report extra detail on stderr, including the resolved settings")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "TOML configuration file (default '.gopuml.toml' in the working directory, when present)")]
    pub config: Option<PathBuf>,

    /// Create a default configuration file and exit
    #[arg(long, help = "Write a commented default .gopuml.toml to the working directory and exit")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gopuml"]);
        assert!(args.path.is_none());
        assert!(args.exclude.is_empty());
        assert!(!args.include_globals);
        assert!(!args.dump);
        assert!(!args.init);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["gopuml", "-p", "proj", "-g", "-d", "-q"]);
        assert_eq!(args.path, Some(PathBuf::from("proj")));
        assert!(args.include_globals);
        assert!(args.dump);
        assert!(args.quiet);
    }

    #[test]
    fn test_repeated_exclude() {
        let args = Args::parse_from([
            "gopuml",
            "--exclude",
            "**/vendor/**",
            "--exclude",
            "**/testdata/**",
        ]);
        assert_eq!(args.exclude.len(), 2);
    }
}
