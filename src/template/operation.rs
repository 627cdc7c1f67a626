use crate::error::Result;
use crate::ioutils::{ensure_dir, write_file};
use std::path::PathBuf;

/// A filesystem effect produced by a generator.
#[derive(Debug)]
pub enum FileOperation {
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
}

impl FileOperation {
    pub fn write(target: PathBuf, content: String) -> Self {
        let target_exists = target.exists();
        FileOperation::Write { target, content, target_exists }
    }

    pub fn create_directory(target: PathBuf) -> Self {
        let target_exists = target.is_dir();
        FileOperation::CreateDirectory { target, target_exists }
    }

    pub fn target_path(&self) -> &PathBuf {
        match self {
            FileOperation::Write { target, .. } => target,
            FileOperation::CreateDirectory { target, .. } => target,
        }
    }

    /// Performs the operation. Writes always truncate; existing directories are fine.
    pub fn apply(&self) -> Result<()> {
        match self {
            FileOperation::Write { target, content, .. } => write_file(content, target),
            FileOperation::CreateDirectory { target, .. } => ensure_dir(target),
        }
    }

    /// Gets a message describing the operation.
    pub fn get_message(&self) -> String {
        match self {
            FileOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!("Writing to '{}' (overwriting existing file)", target.display())
                } else {
                    format!("Writing to '{}'", target.display())
                }
            }
            FileOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!("Skipping directory creation '{}' (already exists)", target.display())
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }
        }
    }
}
