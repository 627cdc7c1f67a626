use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use tiergen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Returns the file name without its extension, erroring when the path has
    /// no file name or the stem is not valid Unicode.
    ///
    /// # Examples
    /// ```
    /// use tiergen::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("models/Booking.cs");
    /// assert_eq!(path.file_stem_checked().unwrap(), "Booking");
    /// ```
    fn file_stem_checked(&self) -> Result<&str>;

    /// Returns the extension including its leading dot, or an empty string.
    fn dotted_extension(&self) -> String;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn file_stem_checked(&self) -> Result<&str> {
        self.file_stem().and_then(|stem| stem.to_str()).ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' has no usable file name",
                self.display()
            ))
        })
    }

    fn dotted_extension(&self) -> String {
        self.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default()
    }
}
