//! Output writing functionality
//!
//! Writers for the two output destinations: stdout (the default, so the
//! diagram can be piped straight into PlantUML) and a file.

use crate::error::{GopumlError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| GopumlError::StdoutWrite { source })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: std::path::PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        File::create(&self.path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|source| GopumlError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}
