use crate::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Static template bodies, one per artifact kind, loaded by name from a directory.
#[derive(Debug, Clone)]
pub struct TemplateAssets {
    root: PathBuf,
    suffix: String,
}

impl TemplateAssets {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(root: P, suffix: S) -> Self {
        Self { root: root.into(), suffix: suffix.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}{}", self.suffix))
    }

    /// Loads the asset called `name`.
    ///
    /// # Returns
    /// * `Ok(Some(body))` - the asset exists
    /// * `Ok(None)` - the asset is missing; a warning has been logged
    /// * `Err(_)` - the asset exists but could not be read
    pub fn load(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_of(name);
        match std::fs::read_to_string(&path) {
            Ok(body) => {
                log::debug!("Loaded template asset '{name}' from {}", path.display());
                Ok(Some(body))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("Template asset '{name}' not found at {}; skipping", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
