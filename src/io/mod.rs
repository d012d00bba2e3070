pub mod output;
pub mod writers;

pub use output::{create_writer, detail_fields, OutputFormat, OutputWriter, ResultView};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
