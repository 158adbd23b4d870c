//! Ensure only one bullet-server writes to an output directory.
//!
//! Updates within one process are serialised through `AppState`; this lock
//! stops a second process from writing the same calendar file.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

static LOCK_FILE: &str = ".bullet-server.lock";

/// A lock guard that releases the lock when dropped
pub struct LockGuard {
    _file: File,
}

fn lock_path(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Could not create output directory {}", output_dir.display()))?;

    Ok(output_dir.join(LOCK_FILE))
}

/// Acquire an exclusive lock on `output_dir`, failing if another instance holds it
pub fn acquire_lock(output_dir: &Path) -> Result<LockGuard> {
    let path = lock_path(output_dir)?;
    let file = File::create(&path).context("Failed to create lock file")?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another bullet-server instance is already writing to {}.\n\
            If you believe this is an error, remove: {}",
            output_dir.display(),
            path.display()
        )
    })?;

    Ok(LockGuard { _file: file })
}
