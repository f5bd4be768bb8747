mod report;
mod summary;

pub use report::render_markdown;
pub use summary::render_json;

use crate::error::OutputError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the rendered report to `path`, or stdout when no path is given
pub fn write_report(path: Option<&Path>, content: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => fs::write(path, content).map_err(OutputError::WriteReport),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(OutputError::WriteReport)
        }
    }
}
