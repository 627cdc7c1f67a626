use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Creates `dest_path` and its parents. A directory that already exists,
/// including one created concurrently by another generator, is not an error.
pub fn ensure_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    match std::fs::create_dir_all(dest_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dest_path.is_dir() => Ok(()),
        Err(e) => Err(Error::IoError(e)),
    }
}

/// Writes `content` to `dest_path`, creating parent directories and truncating any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        ensure_dir(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
