pub mod convert;
pub mod preview;

use std::path::Path;

use anyhow::{Context, Result};

/// Read a CSV export from disk.
fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
}
