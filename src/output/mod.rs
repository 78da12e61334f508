//! Output rendering and writing

pub mod dump;
pub mod puml;
pub mod writers;

pub use writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};
