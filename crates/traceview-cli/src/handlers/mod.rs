pub mod render;
pub mod sample;
pub mod stats;

use anyhow::{Context, Result};
use std::path::Path;
use traceview_types::TraceDocument;

/// Load a trace document from a path, reading stdin when the path is `-`.
pub fn load_document(path: &Path) -> Result<TraceDocument> {
    if path == Path::new("-") {
        return TraceDocument::from_reader(std::io::stdin().lock())
            .context("failed to read trace document from stdin");
    }

    TraceDocument::load(path)
        .with_context(|| format!("failed to load trace document: {}", path.display()))
}

/// Write output to a file, or stdout when no path was given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write output: {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
