use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::Result;
use crate::ext::PathExt;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Builds the set of patterns excluded from model enumeration.
///
/// Patterns are relative to `model_root`; the built-in defaults come first,
/// followed by `extra` patterns from the configuration.
pub fn build_ignore_set<P: AsRef<Path>>(model_root: P, extra: &[String]) -> Result<GlobSet> {
    let model_root = model_root.as_ref();
    let mut builder = GlobSetBuilder::new();

    let patterns = DEFAULT_IGNORE_PATTERNS
        .iter()
        .map(|pattern| pattern.to_string())
        .chain(extra.iter().map(|line| line.trim().to_string()))
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    for pattern in patterns {
        let absolute = model_root.join(&pattern);
        let absolute = absolute.to_str_checked()?;
        debug!("Adding ignore pattern: {absolute} to globset");
        builder.add(Glob::new(absolute)?);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_apply() {
        let root = Path::new("/models");
        let set = build_ignore_set(root, &[]).unwrap();
        assert!(set.is_match(root.join("bin/Debug/Booking.cs")));
        assert!(set.is_match(root.join("nested/.DS_Store")));
        assert!(!set.is_match(root.join("Booking.cs")));
    }

    #[test]
    fn configured_patterns_are_added() {
        let root = Path::new("/models");
        let set = build_ignore_set(
            root,
            &["*.Designer.cs".to_string(), "# comment".to_string(), "  ".to_string()],
        )
        .unwrap();
        assert!(set.is_match(root.join("Booking.Designer.cs")));
        assert!(!set.is_match(root.join("Booking.cs")));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(build_ignore_set("/models", &["a[".to_string()]).is_err());
    }
}
