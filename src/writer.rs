//! Filesystem output for generated artifacts.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

fn absolute(path: &Path) -> PathBuf {
    let base_path = std::env::current_dir().unwrap_or_default();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_path.join(path)
    }
}

/// Creates a directory and all missing ancestors. A no-op when the
/// directory already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(absolute(path)).map_err(Error::IoError)
}

/// Writes `content` to `path`, creating missing parent directories and
/// overwriting any existing file. There is no atomicity guarantee: a crash
/// mid-write can leave a truncated file behind.
///
/// Emits a confirmation line per written file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let abs_path = absolute(path);

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(&abs_path, content).map_err(Error::IoError)?;
    debug!("Wrote {} bytes to {}", content.len(), abs_path.display());
    println!("Created '{}'", path.display());
    Ok(())
}
