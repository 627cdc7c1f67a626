use crate::error::{Error, Result};
use crate::ext::PathExt;
use globset::GlobSet;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One model definition file. Identity is the model name (file stem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub path: PathBuf,
}

impl ModelDescriptor {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// Lists every model file under `model_root`, recursively and sorted by file name.
///
/// Subdirectories carry no meaning. A file whose stem repeats an earlier model
/// name is skipped with a warning.
pub fn enumerate_models<P: AsRef<Path>>(
    model_root: P,
    ignore: &GlobSet,
) -> Result<Vec<ModelDescriptor>> {
    let model_root = model_root.as_ref();
    if !model_root.is_dir() {
        return Err(Error::ModelDirDoesNotExistError {
            model_dir: model_root.display().to_string(),
        });
    }

    let mut models: IndexMap<String, ModelDescriptor> = IndexMap::new();
    for dir_entry in WalkDir::new(model_root).sort_by_file_name() {
        let entry = dir_entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if ignore.is_match(path) {
            log::debug!("Ignoring '{}' (matches ignore pattern)", path.display());
            continue;
        }

        let name = path.file_stem_checked()?.to_string();
        if let Some(existing) = models.get(&name) {
            log::warn!(
                "Skipping '{}': model '{name}' already defined by '{}'",
                path.display(),
                existing.path.display()
            );
            continue;
        }
        models.insert(name.clone(), ModelDescriptor::new(name, path));
    }

    Ok(models.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::build_ignore_set;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn walks_recursively_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Invoice.cs");
        touch(dir.path(), "Booking.cs");
        touch(dir.path(), "pms/Room.cs");

        let ignore = build_ignore_set(dir.path(), &[]).unwrap();
        let names: Vec<_> = enumerate_models(dir.path(), &ignore)
            .unwrap()
            .into_iter()
            .map(|model| model.name)
            .collect();
        assert_eq!(names, vec!["Booking", "Invoice", "Room"]);
    }

    #[test]
    fn duplicate_stems_keep_first() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a/Booking.cs");
        touch(dir.path(), "b/Booking.cs");

        let ignore = build_ignore_set(dir.path(), &[]).unwrap();
        let models = enumerate_models(dir.path(), &ignore).unwrap();
        assert_eq!(models.len(), 1);
        assert!(models[0].path.ends_with("a/Booking.cs"));
    }

    #[test]
    fn ignored_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Booking.cs");
        touch(dir.path(), "obj/Generated.cs");

        let ignore = build_ignore_set(dir.path(), &[]).unwrap();
        let models = enumerate_models(dir.path(), &ignore).unwrap();
        assert_eq!(models, vec![ModelDescriptor::new("Booking", dir.path().join("Booking.cs"))]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let ignore = GlobSet::empty();
        let err = enumerate_models("/definitely/not/here", &ignore).unwrap_err();
        assert!(matches!(err, Error::ModelDirDoesNotExistError { .. }));
    }
}
